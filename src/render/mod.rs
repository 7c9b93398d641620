mod frame;
mod selection;
mod tooltip;

pub use frame::{Legend, MapFrame, RenderedFeature};
pub use selection::{CategoryFilter, Selection};
pub use tooltip::{TooltipLine, TooltipTemplate};

use impactmap_geom::Reprojector;
use tracing::info;

use crate::{
    config::StyleConfig,
    error::{Error, Result},
    feature::{build_with, ProjectedFeature},
    record::RawRecord,
    source::DataSource,
    style::{encode_categorical, encode_field},
    view::bounds,
};

/// Runs the whole pipeline for one selection. Holds only immutable state,
/// so one renderer can serve any number of passes.
pub struct Renderer {
    config: StyleConfig,
    reprojector: Reprojector,
}

impl Renderer {
    pub fn new(config: StyleConfig) -> Result<Self> {
        let reprojector = Reprojector::national_grid_to_wgs84().map_err(Error::Projection)?;
        Ok(Self { config, reprojector })
    }

    #[inline] pub fn config(&self) -> &StyleConfig { &self.config }

    /// Build, filter, encode and frame `records`.
    ///
    /// Returns `Ok(None)` when nothing survives the selection; the color domain
    /// covers only the selected features.
    pub fn render(&self, records: &[RawRecord], selection: &Selection) -> Result<Option<MapFrame>> {
        let selected = build_with(records, &self.reprojector)?
            .into_iter()
            .filter(|feature| selection.matches(feature))
            .collect::<Vec<_>>();

        if selected.is_empty() {
            info!(records = records.len(), ?selection, "nothing to draw");
            return Ok(None)
        }

        let (styles, legend) = match &self.config.category {
            Some(attribute) => {
                let (styles, legend) = encode_categorical(&selected, attribute, &self.config.category_palette)?.into_parts();
                (styles, Legend::Categorical(legend))
            }
            None => {
                let (styles, legend) = encode_field(
                    &selected,
                    &self.config.score_field(),
                    &self.config.palette,
                    &self.config.ranges(),
                    &self.config.title,
                )?.into_parts();
                (styles, Legend::Continuous(legend))
            }
        };

        let bounds = bounds(&selected)?;
        let features = selected.into_iter()
            .map(|feature: ProjectedFeature| RenderedFeature {
                style: styles.get(feature.id()).copied().unwrap_or_default(),
                tooltip: self.config.tooltip.render(&feature),
                feature,
            })
            .collect::<Vec<_>>();

        let frame = MapFrame::new(features, legend, bounds);
        info!(
            features = frame.features().len(),
            total_score = frame.total_score(),
            legend = frame.legend().caption(),
            "rendered frame",
        );
        Ok(Some(frame))
    }

    /// Pull the selected group's rows from `source` and render them.
    ///
    /// A group with no rows is the empty state, as in [`Renderer::render`];
    /// only a source with no rows at all is `EmptyInput`.
    pub fn render_source(&self, source: &dyn DataSource, selection: &Selection) -> Result<Option<MapFrame>> {
        let records = source.records(selection.group.as_deref())?;
        if records.is_empty() && selection.group.is_some() {
            info!(?selection, "no rows for group, nothing to draw");
            return Ok(None)
        }
        self.render(&records, selection)
    }
}
