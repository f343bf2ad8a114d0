//! HTML landing page shown to browsers that open the MCP endpoint.

use chrono::{DateTime, Datelike, Utc};

use crate::domain::Profile;

/// Local development URL advertised in the connection instructions.
pub const LOCAL_DEV_URL: &str = "http://localhost:8787/sse";

/// Render the landing page for `profile` as of `now`.
///
/// Pure: the only time-dependent part is the footer year, taken from `now`.
pub fn render_landing_page(profile: &Profile, now: DateTime<Utc>) -> String {
    let name = profile.name;
    let platforms = social_platform_list(profile);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{name}'s Personal MCP Server</title>
    <style>
        body {{ font-family: sans-serif; line-height: 1.6; margin: 20px; }}
        h1, h2 {{ color: #333; }}
        code {{ background-color: #f4f4f4; padding: 2px 5px; border-radius: 4px; }}
        footer {{ margin-top: 40px; color: #777; font-size: 0.9em; }}
    </style>
</head>
<body>
    <h1>{name}'s Personal MCP Server</h1>
    <p>This is a Model Context Protocol (MCP) server providing information about {name}.</p>
    <h2>Available Tools:</h2>
    <ul>
        <li><code>get_bio</code>: Returns a paragraph biography of {name}.</li>
        <li><code>get_contact_info</code>: Returns the contact email for {name} ({contact}).</li>
        <li><code>get_social_links</code>: Returns JSON with {name}'s {platforms} accounts.</li>
    </ul>
    <h2>Connecting Clients:</h2>
    <p>You can connect to this server using MCP-compatible clients like Cloudflare AI Playground, Claude Desktop, or Cursor.</p>
    <h3>Cloudflare AI Playground:</h3>
    <p>Go to <a href="https://playground.ai.cloudflare.com/">https://playground.ai.cloudflare.com/</a> and enter your deployed server URL ending in <code>/sse</code>.</p>
    <h3>Other Clients (Claude Desktop, Cursor):</h3>
    <p>Use the <code>mcp-remote</code> proxy. Configure your client with command <code>npx</code> and arguments <code>mcp-remote</code> and your server URL ending in <code>/sse</code> (or <code>{local}</code> for local development).</p>
    <footer>&copy; {year} {name}</footer>
</body>
</html>
"#,
        contact = profile.contact,
        local = LOCAL_DEV_URL,
        year = now.year(),
    )
}

/// "Linkedin, Github, and Instagram" style list of platform names.
fn social_platform_list(profile: &Profile) -> String {
    let names: Vec<String> = profile
        .social_links
        .iter()
        .map(|(platform, _)| capitalize(platform))
        .collect();
    match names.as_slice() {
        [] => String::new(),
        [one] => one.clone(),
        [a, b] => format!("{a} and {b}"),
        [rest @ .., last] => format!("{}, and {last}", rest.join(", ")),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
