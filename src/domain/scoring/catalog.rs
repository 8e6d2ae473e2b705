//! Default technology catalog for the MCDA screen.

use once_cell::sync::Lazy;

use super::{CriterionScores, TechnologyScores};

static DEFAULT_CATALOG: Lazy<Vec<TechnologyScores>> = Lazy::new(|| {
    vec![
        TechnologyScores::new("Gasification", CriterionScores::new(7.5, 8.2, 6.8, 7.8, 7.0)),
        TechnologyScores::new(
            "Anaerobic Digestion",
            CriterionScores::new(7.2, 8.8, 8.5, 7.0, 8.5),
        ),
        TechnologyScores::new("Incineration", CriterionScores::new(8.0, 6.0, 5.5, 8.5, 6.0)),
        TechnologyScores::new("Pyrolysis", CriterionScores::new(6.8, 7.5, 6.5, 7.0, 6.5)),
        TechnologyScores::new("RDF", CriterionScores::new(7.0, 7.2, 7.0, 7.5, 7.2)),
    ]
});

/// The five reference technologies with their expert scores.
pub fn default_catalog() -> &'static [TechnologyScores] {
    &DEFAULT_CATALOG
}
