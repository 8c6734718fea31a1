//! Named amplitude presets.
//!
//! A preset is an ordered list of amplitudes applied to modes by index.
//! Built-in presets target the stock mode order (see
//! [`crate::deformer::default_modes`]).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub amplitudes: Vec<f64>,
}

impl Preset {
    pub fn new(name: impl Into<String>, amplitudes: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            amplitudes,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self)
            .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize preset: {e}\"}}"))
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Stock presets, in display order.
pub fn builtin_presets() -> Vec<Preset> {
    vec![
        Preset::new("Sphere", vec![0.0; 7]),
        Preset::new("Default", vec![20.0, 10.0, 5.0, 0.0, 0.0, 0.0, 0.0]),
        Preset::new("Blobby", vec![35.0, 0.0, 0.0, 10.0, 0.0, 0.0, 5.0]),
        Preset::new("Spiky", vec![0.0, 25.0, 30.0, 0.0, 10.0, 0.0, 0.0]),
        Preset::new("Twisted", vec![10.0, 0.0, 0.0, 0.0, 0.0, 40.0, 0.0]),
        Preset::new("Organic", vec![15.0, 8.0, 4.0, 6.0, 12.0, 10.0, 20.0]),
    ]
}

/// Built-in plus user presets with a cycling cursor.
///
/// The cursor is unset until a preset is selected or cycled to.
#[derive(Debug, Clone)]
pub struct PresetLibrary {
    presets: Vec<Preset>,
    cursor: Option<usize>,
}

impl PresetLibrary {
    /// Library of built-ins followed by `user` presets.
    ///
    /// A user preset whose name matches an earlier entry replaces it.
    pub fn new(user: impl IntoIterator<Item = Preset>) -> Self {
        let mut library = Self {
            presets: builtin_presets(),
            cursor: None,
        };
        for preset in user {
            library.insert(preset);
        }
        library
    }

    /// Add or replace a preset by case-insensitive name. Returns its index.
    pub fn insert(&mut self, preset: Preset) -> usize {
        if let Some(idx) = self.position(&preset.name) {
            self.presets[idx] = preset;
            idx
        } else {
            self.presets.push(preset);
            self.presets.len() - 1
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.presets
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(name))
    }

    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.position(name).map(|i| &self.presets[i])
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.name.as_str()).collect()
    }

    /// Move the cursor to `name`, returning the preset if found.
    pub fn select(&mut self, name: &str) -> Option<&Preset> {
        let idx = self.position(name)?;
        self.cursor = Some(idx);
        Some(&self.presets[idx])
    }

    /// The last selected preset, if any.
    pub fn current(&self) -> Option<&Preset> {
        self.presets.get(self.cursor?)
    }

    /// Advance the cursor (wrapping) and return the new current preset.
    /// From an unset cursor this is the first preset.
    pub fn cycle_next(&mut self) -> Option<&Preset> {
        let len = self.presets.len();
        if len == 0 {
            return None;
        }
        self.cursor = Some(self.cursor.map_or(0, |c| (c + 1) % len));
        self.current()
    }

    /// Step the cursor back (wrapping) and return the new current preset.
    /// From an unset cursor this is the last preset.
    pub fn cycle_prev(&mut self) -> Option<&Preset> {
        let len = self.presets.len();
        if len == 0 {
            return None;
        }
        self.cursor = Some(self.cursor.map_or(len - 1, |c| (c + len - 1) % len));
        self.current()
    }
}

impl Default for PresetLibrary {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
