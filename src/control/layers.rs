use crate::constants::{AU, LIGHT_YEAR, OBSERVABLE_UNIVERSE_RADIUS};
use crate::errors::SimulationError;

#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub name: String,
    pub min_alt: f64,
    pub max_alt: f64,
    pub sky_gradient: String,
    pub star_density: u32,
    pub galaxy_density: u32,
    pub is_final: bool,
}

impl Layer {
    pub fn new(
        name: &str,
        min_alt: f64,
        max_alt: f64,
        sky_gradient: &str,
        star_density: u32,
        galaxy_density: u32,
    ) -> Self {
        Layer {
            name: name.to_string(),
            min_alt,
            max_alt,
            sky_gradient: sky_gradient.to_string(),
            star_density,
            galaxy_density,
            is_final: false,
        }
    }

    pub fn into_final(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn contains(&self, altitude: f64) -> bool {
        altitude >= self.min_alt && altitude < self.max_alt
    }

    pub fn same_sky_population(&self, other: &Layer) -> bool {
        self.star_density == other.star_density && self.galaxy_density == other.galaxy_density
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayerTable {
    layers: Vec<Layer>,
}

impl LayerTable {
    pub fn new(layers: Vec<Layer>) -> Result<Self, SimulationError> {
        let last = layers
            .last()
            .ok_or_else(|| SimulationError::LayerTable("table is empty".to_string()))?;

        if last.max_alt != f64::INFINITY {
            return Err(SimulationError::LayerTable(format!(
                "last layer '{}' must be unbounded",
                last.name
            )));
        }
        if !last.is_final {
            return Err(SimulationError::LayerTable(format!(
                "last layer '{}' must be final",
                last.name
            )));
        }
        if let Some(early) = layers[..layers.len() - 1].iter().find(|l| l.is_final) {
            return Err(SimulationError::LayerTable(format!(
                "only the last layer may be final, found '{}'",
                early.name
            )));
        }
        if layers[0].min_alt > 0.0 {
            return Err(SimulationError::LayerTable(
                "first layer must start at or below the surface".to_string(),
            ));
        }

        for layer in &layers {
            if !(layer.min_alt < layer.max_alt) {
                return Err(SimulationError::LayerTable(format!(
                    "layer '{}' has an empty band",
                    layer.name
                )));
            }
        }
        for pair in layers.windows(2) {
            if pair[0].max_alt != pair[1].min_alt {
                return Err(SimulationError::LayerTable(format!(
                    "gap or overlap between '{}' and '{}'",
                    pair[0].name, pair[1].name
                )));
            }
        }

        Ok(LayerTable { layers })
    }

    pub fn standard() -> Self {
        #[rustfmt::skip]
        let layers = vec![
            Layer::new("Surface", f64::NEG_INFINITY, 0.0,
                "linear-gradient(to top, #6a8aab 0%, #87CEEB 30%, #d0e0f0 80%, #304060 100%)", 0, 0),
            Layer::new("Troposphere", 0.0, 15_000.0,
                "linear-gradient(to top, #87CEEB 0%, #aaddf0 60%, #c0e0ff 100%)", 0, 0),
            Layer::new("Stratosphere", 15_000.0, 50_000.0,
                "linear-gradient(to top, #a0c0f0 0%, #70a0ff 70%, #4060b0 100%)", 0, 0),
            Layer::new("Mesosphere", 50_000.0, 85_000.0,
                "linear-gradient(to top, #4060b0 0%, #203080 60%, #101848 100%)", 0, 0),
            Layer::new("Thermosphere", 85_000.0, 600_000.0,
                "linear-gradient(to top, #101848 0%, #080c24 70%, #02030a 100%)", 5, 0),
            Layer::new("Exosphere", 600_000.0, 10e6,
                "linear-gradient(to top, #02030a 0%, #010103 80%, #000 100%)", 30, 0),
            Layer::new("Near Space", 10e6, AU / 2.0,
                "linear-gradient(to top, #000005 0%, #010108 50%, #000 100%)", 80, 0),
            Layer::new("Inner Solar System", AU / 2.0, 5.0 * AU,
                "linear-gradient(to top, #010108 0%, #020105 70%, #000 100%)", 150, 0),
            Layer::new("Outer Solar System", 5.0 * AU, 50.0 * AU,
                "linear-gradient(to top, #020105 0%, #030108 80%, #000 100%)", 200, 0),
            Layer::new("Interstellar Space", 50.0 * AU, 2.0 * LIGHT_YEAR,
                "linear-gradient(to top, #030108 0%, #05020D 60%, #010001 100%)", 300, 1),
            Layer::new("Deep Space", 2.0 * LIGHT_YEAR, 1e6 * LIGHT_YEAR,
                "linear-gradient(to top, #05020D 0%, #0A0514 50%, #010001 100%)", 200, 5),
            Layer::new("Intergalactic Void", 1e6 * LIGHT_YEAR, 1e9 * LIGHT_YEAR,
                "linear-gradient(to top, #0A0514 0%, #140A1F 50%, #010001 100%)", 50, 20),
            Layer::new("Cosmic Web", 1e9 * LIGHT_YEAR, OBSERVABLE_UNIVERSE_RADIUS * 0.9,
                "linear-gradient(to top, #140A1F 0%, #1F0A14 60%, #050105 100%)", 20, 50),
            Layer::new("Edge of Observable Universe", OBSERVABLE_UNIVERSE_RADIUS * 0.9, f64::INFINITY,
                "linear-gradient(to top, #1F0A14 0%, #291a29 50%, #402A40 100%)", 5, 100)
                .into_final(),
        ];

        // The built-in catalog satisfies every table invariant.
        LayerTable { layers }
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    pub fn last_index(&self) -> usize {
        self.layers.len() - 1
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.layers.iter().position(|layer| layer.name == name)
    }
}

impl Default for LayerTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::ops::Index<usize> for LayerTable {
    type Output = Layer;

    fn index(&self, index: usize) -> &Layer {
        &self.layers[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_is_valid() {
        let table = LayerTable::standard();
        assert_eq!(table.len(), 14);
        assert!(LayerTable::new(table.layers().to_vec()).is_ok());
    }

    #[test]
    fn test_standard_table_order() {
        let table = LayerTable::standard();
        assert_eq!(table[0].name, "Surface");
        assert_eq!(table.index_of("Mesosphere"), Some(3));
        assert_eq!(table.index_of("Thermosphere"), Some(4));
        assert_eq!(table[4].min_alt, 85_000.0);
        assert_eq!(table[4].max_alt, 600_000.0);
        assert_eq!(table[4].star_density, 5);
    }

    #[test]
    fn test_only_last_layer_is_final() {
        let table = LayerTable::standard();
        let finals: Vec<usize> = (0..table.len()).filter(|&i| table[i].is_final).collect();
        assert_eq!(finals, vec![table.last_index()]);
        assert_eq!(table[table.last_index()].name, "Edge of Observable Universe");
        assert_eq!(table[table.last_index()].max_alt, f64::INFINITY);
    }

    #[test]
    fn test_contains_is_half_open() {
        let layer = Layer::new("Band", 10.0, 20.0, "", 0, 0);
        assert!(layer.contains(10.0));
        assert!(layer.contains(19.999));
        assert!(!layer.contains(20.0));
        assert!(!layer.contains(9.0));
    }

    #[test]
    fn test_same_sky_population() {
        let table = LayerTable::standard();
        assert!(table[1].same_sky_population(&table[2]));
        assert!(!table[3].same_sky_population(&table[4]));
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(matches!(
            LayerTable::new(Vec::new()),
            Err(SimulationError::LayerTable(_))
        ));
    }

    #[test]
    fn test_gap_rejected() {
        let layers = vec![
            Layer::new("Low", 0.0, 100.0, "", 0, 0),
            Layer::new("High", 150.0, f64::INFINITY, "", 0, 0).into_final(),
        ];
        assert!(LayerTable::new(layers).is_err());
    }

    #[test]
    fn test_unbounded_non_final_rejected() {
        let layers = vec![
            Layer::new("Low", 0.0, 100.0, "", 0, 0),
            Layer::new("High", 100.0, f64::INFINITY, "", 0, 0),
        ];
        assert!(LayerTable::new(layers).is_err());
    }

    #[test]
    fn test_early_final_rejected() {
        let layers = vec![
            Layer::new("Low", 0.0, 100.0, "", 0, 0).into_final(),
            Layer::new("High", 100.0, f64::INFINITY, "", 0, 0).into_final(),
        ];
        assert!(LayerTable::new(layers).is_err());
    }

    #[test]
    fn test_table_must_cover_surface() {
        let layers = vec![Layer::new("Orbit", 100.0, f64::INFINITY, "", 0, 0).into_final()];
        assert!(LayerTable::new(layers).is_err());
    }
}
