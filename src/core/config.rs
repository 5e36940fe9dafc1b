//! Conversion configuration + fluent builder.

use crate::core::{
    constants::{PLUS, STAR},
    glyphs::Style,
};

/// Which glyph table each junction marker draws from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    pub plus: Style,
    pub star: Style,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            plus: Style::Square,
            star: Style::Rounded,
        }
    }
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Style for a junction marker, `None` if `ch` is not one.
    #[inline]
    #[must_use]
    pub const fn style_for(&self, ch: char) -> Option<Style> {
        match ch {
            PLUS => Some(self.plus),
            STAR => Some(self.star),
            _ => None,
        }
    }
}

/// Unset fields fall back to [`Config::default`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    plus: Option<Style>,
    star: Option<Style>,
}

impl ConfigBuilder {
    #[inline]
    #[must_use]
    pub fn plus(mut self, s: Style) -> Self {
        self.plus = Some(s);
        self
    }
    #[inline]
    #[must_use]
    pub fn star(mut self, s: Style) -> Self {
        self.star = Some(s);
        self
    }

    #[must_use]
    pub fn build(self) -> Config {
        let d = Config::default();
        Config {
            plus: self.plus.unwrap_or(d.plus),
            star: self.star.unwrap_or(d.star),
        }
    }
}

impl From<ConfigBuilder> for Config {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_routes_markers_to_their_own_style() {
        let cfg = Config::default();
        assert_eq!(cfg.style_for('+'), Some(Style::Square));
        assert_eq!(cfg.style_for('*'), Some(Style::Rounded));
        assert_eq!(cfg.style_for('x'), None);
    }

    #[test]
    fn builder_overrides_only_what_is_set() {
        let cfg = Config::builder().plus(Style::Rounded).build();
        assert_eq!(cfg.plus, Style::Rounded);
        assert_eq!(cfg.star, Style::Rounded);

        let cfg: Config = Config::builder().star(Style::Square).into();
        assert_eq!(cfg.plus, Style::Square);
        assert_eq!(cfg.star, Style::Square);
    }
}
