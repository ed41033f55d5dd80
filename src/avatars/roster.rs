// avatars/roster.rs

use bevy::color::{Color, Srgba};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

const AVATARS_JSON: &str = include_str!("../../assets/avatars.json");

const DEFAULT_SPACING: f32 = 2.1;
const DEFAULT_STAGGER: f32 = 0.07;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to parse avatar roster: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("avatar {label:?} has an invalid color {value:?}")]
    InvalidColor { label: String, value: String },
    #[error("duplicate avatar label {0:?}")]
    DuplicateLabel(String),
    #[error("spacing must be a positive number, got {0}")]
    InvalidSpacing(f32),
    #[error("stagger must be a positive number, got {0}")]
    InvalidStagger(f32),
}

#[derive(Debug, Deserialize)]
struct RosterJson {
    #[serde(default = "default_spacing")]
    spacing: f32,
    #[serde(default = "default_stagger")]
    stagger: f32,
    #[serde(default)]
    avatars: Vec<AvatarJson>,
}

#[derive(Debug, Deserialize)]
struct AvatarJson {
    label: String,
    primary: String,
    secondary: Option<String>,
}

fn default_spacing() -> f32 {
    DEFAULT_SPACING
}

fn default_stagger() -> f32 {
    DEFAULT_STAGGER
}

/// One labeled badge, with an optional gradient partner color
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarSpec {
    pub label: String,
    pub primary: Color,
    pub secondary: Option<Color>,
}

impl AvatarSpec {
    /// Color used for the glow; falls back to the primary color
    pub fn glow_color(&self) -> Color {
        self.secondary.unwrap_or(self.primary)
    }
}

/// Ordered, validated list of avatars plus the layout parameters
#[derive(Debug, Clone)]
pub struct Roster {
    pub spacing: f32,
    pub stagger: f32,
    pub avatars: Vec<AvatarSpec>,
}

impl Roster {
    /// Load the roster compiled into the binary
    pub fn load() -> Result<Self, RosterError> {
        Self::from_json(AVATARS_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, RosterError> {
        let raw: RosterJson = serde_json::from_str(json)?;

        if !raw.spacing.is_finite() || raw.spacing <= 0.0 {
            return Err(RosterError::InvalidSpacing(raw.spacing));
        }
        // A zero stagger would start every entrance at once
        if !raw.stagger.is_finite() || raw.stagger <= 0.0 {
            return Err(RosterError::InvalidStagger(raw.stagger));
        }

        let mut seen = HashSet::new();
        let mut avatars = Vec::with_capacity(raw.avatars.len());

        for avatar in raw.avatars {
            if !seen.insert(avatar.label.clone()) {
                return Err(RosterError::DuplicateLabel(avatar.label));
            }

            let primary = parse_color(&avatar.label, &avatar.primary)?;
            let secondary = avatar
                .secondary
                .as_deref()
                .map(|value| parse_color(&avatar.label, value))
                .transpose()?;

            avatars.push(AvatarSpec {
                label: avatar.label,
                primary,
                secondary,
            });
        }

        if avatars.is_empty() {
            log::warn!("avatar roster is empty, nothing will be animated");
        }

        Ok(Roster {
            spacing: raw.spacing,
            stagger: raw.stagger,
            avatars,
        })
    }

    pub fn len(&self) -> usize {
        self.avatars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.avatars.is_empty()
    }
}

impl Default for Roster {
    /// An empty roster, used when the embedded one fails to load
    fn default() -> Self {
        Roster {
            spacing: DEFAULT_SPACING,
            stagger: DEFAULT_STAGGER,
            avatars: Vec::new(),
        }
    }
}

fn parse_color(label: &str, value: &str) -> Result<Color, RosterError> {
    Srgba::hex(value)
        .map(Color::from)
        .map_err(|_| RosterError::InvalidColor {
            label: label.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_roster_loads() {
        let roster = Roster::load().expect("embedded roster should parse");

        let labels: Vec<_> = roster.avatars.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(
            labels,
            ["React", "Vue", "JS", "Python", "PHP", "HTML", "CSS", "Livewire"]
        );
        assert!((roster.spacing - 2.1).abs() < 1e-6);
        assert!((roster.stagger - 0.07).abs() < 1e-6);
    }

    #[test]
    fn test_defaults_when_fields_missing() {
        let roster =
            Roster::from_json(r##"{ "avatars": [ { "label": "Rust", "primary": "#dea584" } ] }"##)
                .unwrap();

        assert_eq!(roster.spacing, DEFAULT_SPACING);
        assert_eq!(roster.stagger, DEFAULT_STAGGER);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.avatars[0].secondary, None);
    }

    #[test]
    fn test_glow_color_prefers_secondary() {
        let roster = Roster::from_json(
            r##"{ "avatars": [
                { "label": "A", "primary": "#ff0000" },
                { "label": "B", "primary": "#ff0000", "secondary": "#0000ff" }
            ] }"##,
        )
        .unwrap();

        assert_eq!(roster.avatars[0].glow_color(), Color::srgb(1.0, 0.0, 0.0));
        assert_eq!(roster.avatars[1].glow_color(), Color::srgb(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_empty_roster_is_valid() {
        let roster = Roster::from_json(r#"{ "avatars": [] }"#).unwrap();
        assert!(roster.is_empty());
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let err = Roster::from_json(
            r##"{ "avatars": [
                { "label": "JS", "primary": "#F7DF1E" },
                { "label": "JS", "primary": "#F7DF1E" }
            ] }"##,
        )
        .unwrap_err();

        assert!(matches!(err, RosterError::DuplicateLabel(label) if label == "JS"));
    }

    #[test]
    fn test_invalid_color_rejected() {
        let err = Roster::from_json(r#"{ "avatars": [ { "label": "X", "primary": "blue" } ] }"#)
            .unwrap_err();

        assert!(matches!(err, RosterError::InvalidColor { .. }));
    }

    #[test]
    fn test_bad_layout_parameters_rejected() {
        let err = Roster::from_json(r#"{ "spacing": 0.0, "avatars": [] }"#).unwrap_err();
        assert!(matches!(err, RosterError::InvalidSpacing(_)));

        let err = Roster::from_json(r#"{ "stagger": -0.1, "avatars": [] }"#).unwrap_err();
        assert!(matches!(err, RosterError::InvalidStagger(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = Roster::from_json("{ not json").unwrap_err();
        assert!(matches!(err, RosterError::Parse(_)));
    }
}
