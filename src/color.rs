use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::charts::price_odometer::ScatterGroup;
use crate::data::filter::ALL_CONDITIONS;
use crate::data::schema::DatasetSchema;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: condition group → Color32
// ---------------------------------------------------------------------------

/// Maps scatter groups to colours. Built from the full dataset so a
/// condition keeps its colour whatever the filters hide.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<ScatterGroup, Color32>,
    default_color: Color32,
}

impl ColorMap {
    pub fn new(groups: impl IntoIterator<Item = ScatterGroup>) -> Self {
        let groups: Vec<ScatterGroup> = groups.into_iter().collect();
        let palette = generate_palette(groups.len());
        let mapping = groups.into_iter().zip(palette).collect();

        ColorMap {
            mapping,
            default_color: Color32::LIGHT_BLUE,
        }
    }

    /// One colour per condition option plus the no-condition group.
    pub fn for_conditions(schema: &DatasetSchema) -> Self {
        let options = schema.condition_options.as_deref().unwrap_or_default();
        ColorMap::new(
            options
                .iter()
                .filter(|o| o.as_str() != ALL_CONDITIONS)
                .map(|o| ScatterGroup::Condition(o.clone()))
                .chain(std::iter::once(ScatterGroup::NoCondition)),
        )
    }

    /// Colour for a group; ungrouped or unknown series get the default.
    pub fn color_for(&self, group: &ScatterGroup) -> Color32 {
        self.mapping
            .get(group)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::table;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        let colors = generate_palette(4);
        assert_eq!(colors.len(), 4);
        assert_ne!(colors[0], colors[2]);
    }

    #[test]
    fn conditions_get_distinct_colors() {
        let t = table(&["condition"], &[&["good"], &["fair"]]);
        let map = ColorMap::for_conditions(&DatasetSchema::detect(&t));
        let good = map.color_for(&ScatterGroup::Condition("good".into()));
        assert_ne!(good, map.color_for(&ScatterGroup::Condition("fair".into())));
        assert_ne!(map.color_for(&ScatterGroup::NoCondition), Color32::LIGHT_BLUE);
        assert_ne!(map.color_for(&ScatterGroup::NoCondition), good);
        assert_eq!(map.color_for(&ScatterGroup::Ungrouped), Color32::LIGHT_BLUE);
    }
}
