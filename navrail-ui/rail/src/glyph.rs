use std::collections::HashMap;
use std::sync::LazyLock;

use iced::Font;
use iced::font::Family;

/// Font family that carries both icon families as Nerd Font codepoints.
pub const GLYPH_FONT: Font = Font {
    family: Family::Name("Symbols Nerd Font Mono"),
    ..Font::DEFAULT
};

/// File name of the font providing [`GLYPH_FONT`].
pub const GLYPH_FONT_FILE: &str = "SymbolsNerdFontMono-Regular.ttf";

/// Name of the glyph used when a lookup misses.
pub const DEFAULT_GLYPH_NAME: &str = "FaHome";

/// Icon family a glyph was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconFamily {
    FontAwesome,
    Material,
}

/// A renderable symbol selected by name from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub name: &'static str,
    pub family: IconFamily,
    pub codepoint: char,
}

impl Glyph {
    /// Text content used to draw the glyph with [`GLYPH_FONT`].
    pub fn text(&self) -> String {
        self.codepoint.to_string()
    }
}

/// The glyph returned for empty, absent, or unknown names.
pub const DEFAULT_GLYPH: Glyph = Glyph {
    name: DEFAULT_GLYPH_NAME,
    family: IconFamily::FontAwesome,
    codepoint: '\u{f015}',
};

const FONT_AWESOME: &[(&str, char)] = &[
    ("FaBars", '\u{f0c9}'),
    ("FaBell", '\u{f0f3}'),
    ("FaBook", '\u{f02d}'),
    ("FaBookmark", '\u{f02e}'),
    ("FaCalendar", '\u{f073}'),
    ("FaChartBar", '\u{f080}'),
    ("FaCode", '\u{f121}'),
    ("FaCog", '\u{f013}'),
    ("FaComments", '\u{f086}'),
    ("FaCompass", '\u{f14e}'),
    ("FaEnvelope", '\u{f0e0}'),
    ("FaFolder", '\u{f07b}'),
    ("FaGamepad", '\u{f11b}'),
    ("FaGithub", '\u{f09b}'),
    ("FaGlobe", '\u{f0ac}'),
    ("FaHeart", '\u{f004}'),
    ("FaHome", '\u{f015}'),
    ("FaImage", '\u{f03e}'),
    ("FaInfoCircle", '\u{f05a}'),
    ("FaLock", '\u{f023}'),
    ("FaMusic", '\u{f001}'),
    ("FaPlus", '\u{f067}'),
    ("FaQuestionCircle", '\u{f059}'),
    ("FaSearch", '\u{f002}'),
    ("FaSignOutAlt", '\u{f08b}'),
    ("FaStar", '\u{f005}'),
    ("FaTerminal", '\u{f120}'),
    ("FaTrash", '\u{f1f8}'),
    ("FaUser", '\u{f007}'),
    ("FaUserFriends", '\u{f0c0}'),
    ("FaUsers", '\u{f0c0}'),
    ("FaVideo", '\u{f03d}'),
];

const MATERIAL: &[(&str, char)] = &[
    ("MdAccountCircle", '\u{f0009}'),
    ("MdChat", '\u{f0b79}'),
    ("MdDashboard", '\u{f056e}'),
    ("MdDelete", '\u{f01b4}'),
    ("MdEmail", '\u{f01ee}'),
    ("MdExplore", '\u{f0207}'),
    ("MdFavorite", '\u{f02d1}'),
    ("MdFolder", '\u{f024b}'),
    ("MdHelp", '\u{f02d6}'),
    ("MdHome", '\u{f02dc}'),
    ("MdInfo", '\u{f02fc}'),
    ("MdMenu", '\u{f035c}'),
    ("MdNotifications", '\u{f009a}'),
    ("MdPerson", '\u{f0004}'),
    ("MdSearch", '\u{f0349}'),
    ("MdSettings", '\u{f0493}'),
    ("MdStar", '\u{f04ce}'),
];

static CATALOG: LazyLock<GlyphCatalog> = LazyLock::new(|| {
    let catalog = GlyphCatalog::merged(&[
        (IconFamily::FontAwesome, FONT_AWESOME),
        (IconFamily::Material, MATERIAL),
    ]);
    log::debug!("glyph catalog loaded with {} entries", catalog.len());
    catalog
});

/// Immutable name → glyph lookup merged from several icon families.
#[derive(Debug, Default)]
pub struct GlyphCatalog {
    entries: HashMap<&'static str, Glyph>,
}

impl GlyphCatalog {
    /// Merge the given tables into one namespace.
    ///
    /// Tables are applied in order and an earlier table keeps a name that a
    /// later table also defines.
    pub fn merged(tables: &[(IconFamily, &'static [(&'static str, char)])]) -> Self {
        let mut entries = HashMap::new();
        for (family, table) in tables {
            for &(name, codepoint) in table.iter() {
                entries.entry(name).or_insert(Glyph {
                    name,
                    family: *family,
                    codepoint,
                });
            }
        }
        Self { entries }
    }

    /// Look up `name`, falling back to [`DEFAULT_GLYPH`] when it is missing.
    pub fn resolve(&self, name: &str) -> Glyph {
        self.entries.get(name).copied().unwrap_or(DEFAULT_GLYPH)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Process-wide catalog of Font Awesome and Material glyphs.
pub fn catalog() -> &'static GlyphCatalog {
    &CATALOG
}

/// Resolve an optional icon name against the process-wide catalog.
pub fn resolve(name: Option<&str>) -> Glyph {
    match name {
        Some(name) if !name.is_empty() => catalog().resolve(name),
        _ => DEFAULT_GLYPH,
    }
}
