use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::CategoryDomain;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Named color scheme requested by the host (e.g. `"cool"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorSchemeId(pub String);

impl ColorSchemeId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Per-key colors that take precedence over palette-derived ones.
pub type ColorOverrideMap = IndexMap<String, Color>;

/// How a palette is laid over a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleKind {
    /// One distinct palette entry per key, cycling when the domain is longer.
    Ordinal,
    /// Interpolated between the first and last palette entries.
    Linear,
}

/// Resolved key-to-color mapping over a fixed domain.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorLookup {
    kind: ScaleKind,
    colors: IndexMap<String, Color>,
}

impl ColorLookup {
    #[must_use]
    pub fn new(kind: ScaleKind, colors: IndexMap<String, Color>) -> Self {
        Self { kind, colors }
    }

    pub fn color(&self, key: &str) -> ChartResult<Color> {
        self.colors
            .get(key)
            .copied()
            .ok_or_else(|| ChartError::UnknownKey {
                key: key.to_owned(),
            })
    }

    #[must_use]
    pub fn kind(&self) -> ScaleKind {
        self.kind
    }

    /// Iterates `(key, color)` in domain order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Color)> {
        self.colors.iter().map(|(key, color)| (key.as_str(), *color))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// External collaborator that turns a scheme and a domain into colors.
pub trait ColorResolver {
    fn resolve(
        &self,
        scheme: Option<&ColorSchemeId>,
        kind: ScaleKind,
        domain: &CategoryDomain,
        custom_colors: Option<&ColorOverrideMap>,
    ) -> ChartResult<ColorLookup>;
}

pub const DEFAULT_SCHEME: &str = "vivid";

const PALETTES: &[(&str, &[&str])] = &[
    (
        "vivid",
        &[
            "#647c8a", "#3f51b5", "#2196f3", "#00b862", "#afdf0a", "#a7b61a", "#f3e562",
            "#ff9800", "#ff5722", "#ff4514",
        ],
    ),
    (
        "natural",
        &[
            "#bf9d76", "#e99450", "#d89f59", "#f2dfa7", "#a5d7c6", "#7794b1", "#afafaf",
            "#707160", "#ba9383", "#d9d5c3",
        ],
    ),
    (
        "cool",
        &[
            "#a8385d", "#7aa3e5", "#a27ea8", "#aae3f5", "#adcded", "#a95963", "#8796c0",
            "#7ed3ed", "#50abcc", "#ad6886",
        ],
    ),
    (
        "fire",
        &[
            "#ff3d00", "#bf360c", "#ff8f00", "#ff6f00", "#ff5722", "#e65100", "#ffca28",
            "#ffab00",
        ],
    ),
    (
        "solar",
        &[
            "#fff8e1", "#ffecb3", "#ffe082", "#ffd54f", "#ffca28", "#ffc107", "#ffb300",
            "#ffa000", "#ff8f00", "#ff6f00",
        ],
    ),
    (
        "air",
        &[
            "#e1f5fe", "#b3e5fc", "#81d4fa", "#4fc3f7", "#29b6f6", "#03a9f4", "#039be5",
            "#0288d1", "#0277bd", "#01579b",
        ],
    ),
    (
        "aqua",
        &[
            "#e0f7fa", "#b2ebf2", "#80deea", "#4dd0e1", "#26c6da", "#00bcd4", "#00acc1",
            "#0097a7", "#00838f", "#006064",
        ],
    ),
    (
        "flame",
        &[
            "#a10a28", "#d3342d", "#ef6d49", "#faad67", "#fdde90", "#dbed91", "#a9d770",
            "#6cba67", "#2c9653", "#146738",
        ],
    ),
    (
        "ocean",
        &[
            "#1d68fb", "#33c0fc", "#4afffe", "#afffff", "#fffc63", "#fdbd2d", "#fc8a25",
            "#fa4f1e", "#fa141b", "#ba38d1",
        ],
    ),
    (
        "forest",
        &[
            "#55c22d", "#c1f33d", "#3cc099", "#afffff", "#8cfc9d", "#76cffa", "#ba60fb",
            "#ee6490", "#c42a1c", "#fc9f32",
        ],
    ),
    (
        "horizon",
        &[
            "#2597fb", "#65ebfd", "#99fdd0", "#fcee4b", "#fefcfa", "#fdd6e3", "#fcb1a8",
            "#ef6f7b", "#cb96e8", "#efdee0",
        ],
    ),
    (
        "neons",
        &[
            "#ff3333", "#ff33ff", "#cc33ff", "#0000ff", "#33ccff", "#33ffff", "#33ff66",
            "#ccff33", "#ffcc00", "#ff6600",
        ],
    ),
    (
        "picnic",
        &[
            "#fac51d", "#66bd6d", "#faa026", "#29bb9c", "#e96b56", "#55acd2", "#b7332f",
            "#2c83c9", "#9166b8", "#92e7e8",
        ],
    ),
    (
        "night",
        &[
            "#2b1b5a", "#501356", "#183356", "#28203f", "#391b3c", "#1e2b3c", "#120634",
            "#2d0432", "#051932", "#453080", "#75267d", "#2c507d", "#4b3880", "#752f7d",
            "#35547d",
        ],
    ),
    (
        "nightLights",
        &[
            "#4e31a5", "#9c25a7", "#3065ab", "#57468b", "#904497", "#46648b", "#32118d",
            "#a00fb3", "#1052a2", "#6e51bd", "#b63cc3", "#6c97cb", "#8671c1", "#b455be",
            "#7496c3",
        ],
    ),
];

/// Default resolver backed by the built-in named palettes.
///
/// Missing or unknown scheme ids use `DEFAULT_SCHEME`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteColorResolver;

impl PaletteColorResolver {
    /// Returns the palette for `scheme`, or `None` if the id is not built in.
    pub fn palette(scheme: &str) -> Option<ChartResult<Vec<Color>>> {
        PALETTES
            .iter()
            .find(|(name, _)| *name == scheme)
            .map(|(_, colors)| colors.iter().map(|hex| Color::from_hex(hex)).collect())
    }

    pub fn scheme_names() -> impl Iterator<Item = &'static str> {
        PALETTES.iter().map(|(name, _)| *name)
    }
}

impl ColorResolver for PaletteColorResolver {
    fn resolve(
        &self,
        scheme: Option<&ColorSchemeId>,
        kind: ScaleKind,
        domain: &CategoryDomain,
        custom_colors: Option<&ColorOverrideMap>,
    ) -> ChartResult<ColorLookup> {
        let requested = scheme.map_or(DEFAULT_SCHEME, ColorSchemeId::as_str);
        let palette = match Self::palette(requested) {
            Some(palette) => palette?,
            None => {
                debug!(scheme = requested, "unknown color scheme; using default palette");
                Self::palette(DEFAULT_SCHEME).unwrap_or_else(|| Ok(Vec::new()))?
            }
        };
        if palette.is_empty() {
            return Err(ChartError::InvalidData("color palette is empty".to_owned()));
        }

        let last = domain.len().saturating_sub(1).max(1) as f64;
        let colors = domain
            .iter()
            .enumerate()
            .map(|(index, key)| {
                let color = custom_colors
                    .and_then(|overrides| overrides.get(key).copied())
                    .unwrap_or_else(|| match kind {
                        ScaleKind::Ordinal => palette[index % palette.len()],
                        ScaleKind::Linear => interpolate(
                            palette[0],
                            palette[palette.len() - 1],
                            index as f64 / last,
                        ),
                    });
                (key.to_owned(), color)
            })
            .collect();

        Ok(ColorLookup::new(kind, colors))
    }
}

fn interpolate(from: Color, to: Color, t: f64) -> Color {
    let lerp = |a: f64, b: f64| a * (1.0 - t) + b * t;
    Color::rgba(
        lerp(from.red, to.red),
        lerp(from.green, to.green),
        lerp(from.blue, to.blue),
        lerp(from.alpha, to.alpha),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_palette_parses() {
        for name in PaletteColorResolver::scheme_names() {
            let palette = PaletteColorResolver::palette(name)
                .expect("listed palette")
                .expect("valid hex colors");
            assert!(!palette.is_empty(), "palette `{name}` must not be empty");
        }
    }

    #[test]
    fn linear_kind_spans_first_to_last_palette_entry() {
        let domain = CategoryDomain::from_keys(["lo", "mid", "hi"]).expect("domain");
        let scheme = ColorSchemeId::new("air");
        let lookup = PaletteColorResolver
            .resolve(Some(&scheme), ScaleKind::Linear, &domain, None)
            .expect("resolve");

        let palette = PaletteColorResolver::palette("air")
            .expect("air palette")
            .expect("valid");
        assert_eq!(lookup.color("lo").expect("lo"), palette[0]);
        assert_eq!(lookup.color("hi").expect("hi"), palette[palette.len() - 1]);
    }
}
