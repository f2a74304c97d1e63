// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Color, DEBUG_PIGMENT_MOD, TransformColor};
use std::collections::{BTreeMap, btree_map};

/// Named colors. Names are unique, and one color may be bound to many names.
///
/// Iteration is ordered by name. Equality compares names exactly and colors with
/// snapped equality.
///
/// ```
/// use r3bl_pigment::{Color, Palette};
///
/// let mut palette: Palette = [("red", Color::rgb(1.0, 0.0, 0.0).unwrap())]
///     .into_iter()
///     .collect();
/// palette.insert(["lime", "green"], Color::hsl(120.0, 1.0, 0.5).unwrap());
///
/// assert_eq!(palette.len(), 3);
/// assert_eq!(palette.get("lime"), palette.get("green"));
/// let removed = palette.remove_color(&Color::rgb(0.0, 1.0, 0.0).unwrap());
/// assert_eq!(removed, vec!["green", "lime"]);
/// ```
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Palette {
    entries: BTreeMap<String, Color>,
}

impl Palette {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<Color> { self.entries.get(name).copied() }

    /// Looks up each name in turn, `None` for names that are not bound.
    #[must_use]
    pub fn get_many(&self, names: &[&str]) -> Vec<Option<Color>> {
        names.iter().map(|name| self.get(name)).collect()
    }

    /// Binds `color` to every name in `names`, replacing existing bindings.
    pub fn insert<I, S>(&mut self, names: I, color: impl Into<Color>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let color = color.into();
        for name in names {
            self.entries.insert(name.into(), color);
        }
    }

    /// Copies every binding from `other`. On a name clash `other` wins.
    pub fn merge(&mut self, other: &Palette) {
        DEBUG_PIGMENT_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "🎨 Merging palettes",
                len = %self.len(),
                other_len = %other.len()
            );
        });
        self.entries
            .extend(other.iter().map(|(name, color)| (name.clone(), *color)));
    }

    /// Returns the color that was bound to `name`, if any.
    pub fn remove_name(&mut self, name: &str) -> Option<Color> { self.entries.remove(name) }

    /// Unbinds every name whose color equals `color` (snapped, in `color`'s
    /// representation). Returns the removed names in order.
    pub fn remove_color(&mut self, color: &impl TransformColor) -> Vec<String> {
        let removed: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, stored)| color.snapped_eq(*stored))
            .map(|(name, _)| name.clone())
            .collect();
        for name in &removed {
            self.entries.remove(name);
        }
        removed
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn colors(&self) -> impl Iterator<Item = &Color> { self.entries.values() }

    #[must_use]
    pub fn iter(&self) -> btree_map::Iter<'_, String, Color> { self.entries.iter() }

    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl PartialEq for Palette {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|((lhs_name, lhs), (rhs_name, rhs))| lhs_name == rhs_name && lhs == rhs)
    }
}

impl<K: Into<String>, C: Into<Color>> FromIterator<(K, C)> for Palette {
    fn from_iter<T: IntoIterator<Item = (K, C)>>(iter: T) -> Self {
        let mut palette = Self::new();
        palette.extend(iter);
        palette
    }
}

impl<K: Into<String>, C: Into<Color>> Extend<(K, C)> for Palette {
    fn extend<T: IntoIterator<Item = (K, C)>>(&mut self, iter: T) {
        for (name, color) in iter {
            self.entries.insert(name.into(), color.into());
        }
    }
}

impl IntoIterator for Palette {
    type Item = (String, Color);
    type IntoIter = btree_map::IntoIter<String, Color>;

    fn into_iter(self) -> Self::IntoIter { self.entries.into_iter() }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = (&'a String, &'a Color);
    type IntoIter = btree_map::Iter<'a, String, Color>;

    fn into_iter(self) -> Self::IntoIter { self.entries.iter() }
}
