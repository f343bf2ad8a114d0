//! Compiled-in profile facts served by the tools and the landing page.

use serde_json::{Map, Value as JsonValue};

/// Immutable facts about one person. Every field is non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub server_name: &'static str,
    pub server_version: &'static str,
    pub bio: &'static str,
    pub contact: &'static str,
    /// Platform name to profile URL, in display order.
    pub social_links: &'static [(&'static str, &'static str)],
}

pub const MB_CROSIER: Profile = Profile {
    name: "MB Crosier",
    server_name: "MB Crosier Personal Server",
    server_version: "1.0.0",
    bio: "MB (\"Mary Boyd\") Crosier is currently a student in Harvard's MS/MBA: Engineering Sciences program. \
MB also writes a Substack newsletter called MCP in Context (https://www.mcpincontext.com) about all things related to the Model Context Protocol. \
Previously, she worked at marketing and operations roles at Stytch (a Series B developer tools startup), as a management consultant focused on tech due diligences at Bain & Co, \
and was a strategy intern at Codecademy, focused on curriculum development and community building. \
Before that, she studied Systems and Information Engineering at UVA, as a  Jefferson Scholar. \
Outside of work, MB enjoys running, doing crosswords, traveling, and scuba diving. \
She also loves learning about local history, and has been a volunteer historical tour guide at the University of Virginia, on Boston's Freedom Trail, and at New York's Merchant House Museum. \
To learn more about MB, visit her personal website at https://www.mbcrosier.com.",
    contact: "mbcrosier@gmail.com",
    social_links: &[
        ("linkedin", "https://linkedin.com/in/maryboydcrosier"),
        ("github", "https://github.com/mbcrosier"),
        ("instagram", "https://instagram.com/maryboydc"),
    ],
};

impl Profile {
    /// Social links as a JSON object, keys kept in declaration order.
    pub fn social_links_json(&self) -> JsonValue {
        let map: Map<String, JsonValue> = self
            .social_links
            .iter()
            .map(|(platform, url)| ((*platform).to_owned(), JsonValue::String((*url).to_owned())))
            .collect();
        JsonValue::Object(map)
    }

    /// Pretty-printed form of [`Profile::social_links_json`], two-space indent.
    pub fn social_links_pretty(&self) -> String {
        // Serializing a Value built from strings cannot fail.
        serde_json::to_string_pretty(&self.social_links_json()).unwrap_or_default()
    }
}
