use crate::error::ChartError;
use crate::group::{self, GroupedEntry};
use crate::models::{ChartSpec, CycleConfig};
use crate::order;
use crate::palette::{self, NamedPalette, PaletteSource};
use crate::rendering::{render_chart, SvgRasterizer};

/// One-shot pipeline: aggregate the color tables, sort, group synonyms,
/// lay the groups out and compose the chart document.
pub struct ChartPipeline {
    spec: ChartSpec,
    rasterizer: SvgRasterizer,
}

impl ChartPipeline {
    pub fn new(spec: ChartSpec) -> Self {
        Self {
            spec,
            rasterizer: SvgRasterizer::new(),
        }
    }

    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    /// Aggregate, sort and group the default sources plus the given cycle.
    pub fn grouped_entries(&self, cycle: &CycleConfig) -> Result<Vec<GroupedEntry>, ChartError> {
        self.group_sources(palette::default_sources(cycle)?)
    }

    /// Aggregate, sort and group an explicit source list.
    pub fn group_sources(
        &self,
        sources: Vec<PaletteSource>,
    ) -> Result<Vec<GroupedEntry>, ChartError> {
        let palette = NamedPalette::from_sources(sources)?;
        tracing::debug!(entries = palette.len(), "Aggregated color sources");

        let mut entries = palette.into_entries();
        order::sort_colors(&mut entries, self.spec.hue_steps);

        let groups = group::group_synonyms(&entries);
        tracing::debug!(groups = groups.len(), "Grouped color synonyms");
        Ok(groups)
    }

    /// Compose the chart SVG and confirm it parses as valid SVG.
    pub fn compose(&self, entries: &[GroupedEntry]) -> Result<String, ChartError> {
        let svg = render_chart(&self.spec, entries)?;
        self.rasterizer.validate(svg.as_bytes())?;

        tracing::debug!(svg_len = svg.len(), "Chart composed");
        Ok(svg)
    }

    /// PNG preview of a composed chart.
    pub fn render_png(&self, svg: &str) -> Result<Vec<u8>, ChartError> {
        Ok(self.rasterizer.render_png(svg.as_bytes(), &self.spec)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_groups() -> Vec<GroupedEntry> {
        let pipeline = ChartPipeline::new(ChartSpec::default());
        pipeline.grouped_entries(&CycleConfig::default()).unwrap()
    }

    /// The stock tables: 176 entries collapse to 153 distinct colors.
    /// Four base letters match their CSS namesakes, nine CSS names are
    /// spelling or alias twins, and all ten cycle aliases land on the
    /// tableau colors.
    #[test]
    fn test_default_chart_group_count() {
        assert_eq!(default_groups().len(), 153);
    }

    /// Greys lead the chart, brightest first, with black closing the run.
    #[test]
    fn test_default_chart_starts_with_the_greys() {
        let groups = default_groups();
        assert_eq!(groups[0].label, "w, white");
        assert_eq!(groups[1].label, "whitesmoke");
        assert_eq!(groups[9].label, "k, black");
    }

    #[test]
    fn test_default_chart_merged_labels() {
        let labels: Vec<String> = default_groups().into_iter().map(|g| g.label).collect();
        assert!(labels.contains(&"aqua, cyan".to_string()));
        assert!(labels.contains(&"fuchsia, magenta".to_string()));
        assert!(labels.contains(&"gr[ae]y".to_string()));
        assert!(labels.contains(&"tab:blue (C0⁺)".to_string()));
        // tab:gray is itself achromatic and sits in the grey run
        assert!(labels.contains(&"tab:gr[ae]y (C7⁺)".to_string()));
        // Every grey spelling has a gray twin, so no label joins to empty
        assert!(labels.iter().all(|l| !l.is_empty()));
    }

    #[test]
    fn test_group_sources_rejects_empty() {
        let pipeline = ChartPipeline::new(ChartSpec::default());
        let result = pipeline.group_sources(vec![]);
        assert!(matches!(result, Err(ChartError::EmptyPalette)));
    }

    #[test]
    fn test_compose_default_chart_is_valid_svg() {
        let pipeline = ChartPipeline::new(ChartSpec::default());
        let groups = pipeline.grouped_entries(&CycleConfig::default()).unwrap();
        let svg = pipeline.compose(&groups).unwrap();
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<line ").count(), 153);
    }
}
