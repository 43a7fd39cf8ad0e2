//! Icon catalog
//!
//! Quick actions store a symbolic icon name. The catalog lists the names the
//! editor offers and the glyph each front end draws for them.

/// Icon offered by the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub name: &'static str,
    pub glyph: &'static str,
    pub label: &'static str,
}

/// Glyph drawn for icon names outside the catalog
pub const FALLBACK_GLYPH: &str = "⚡";

/// Icon preselected for new actions
pub const DEFAULT_ICON: &str = "bolt.fill";

pub const ICON_CATALOG: &[IconSpec] = &[
    IconSpec { name: "bolt.fill", glyph: "⚡", label: "Bolt" },
    IconSpec { name: "play.fill", glyph: "▶", label: "Play" },
    IconSpec { name: "arrow.up.circle", glyph: "⬆", label: "Upload" },
    IconSpec { name: "hammer", glyph: "🔨", label: "Build" },
    IconSpec { name: "ant", glyph: "🐜", label: "Bug" },
    IconSpec { name: "checkmark.circle", glyph: "✔", label: "Check" },
    IconSpec { name: "doc.text", glyph: "📄", label: "Document" },
    IconSpec { name: "magnifyingglass", glyph: "🔍", label: "Search" },
    IconSpec { name: "wand.and.stars", glyph: "✨", label: "Magic" },
    IconSpec { name: "trash", glyph: "🗑", label: "Clean" },
    IconSpec { name: "terminal", glyph: "⌨", label: "Terminal" },
    IconSpec { name: "star", glyph: "★", label: "Star" },
];

/// Look up an icon by its symbolic name
pub fn find_icon(name: &str) -> Option<&'static IconSpec> {
    ICON_CATALOG.iter().find(|spec| spec.name == name)
}

/// Glyph for a symbolic name, or the fallback when unknown
pub fn glyph_for(name: &str) -> &'static str {
    find_icon(name).map(|spec| spec.glyph).unwrap_or(FALLBACK_GLYPH)
}
