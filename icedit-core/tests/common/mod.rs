use icedit_core::{EdgeSource, WeightedEdge};

/// Edge source reading the upper triangle of a square similarity matrix.
///
/// `None` entries are unrecorded pairs.
#[derive(Clone)]
pub struct Similarities {
    name: &'static str,
    rows: Vec<Vec<Option<f64>>>,
}

impl Similarities {
    #[must_use]
    pub fn new(name: &'static str, rows: Vec<Vec<Option<f64>>>) -> Self {
        Self { name, rows }
    }
}

impl EdgeSource for Similarities {
    fn name(&self) -> &str {
        self.name
    }

    fn node_count(&self) -> usize {
        self.rows.len()
    }

    fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.rows.iter().enumerate().flat_map(|(left, row)| {
            row.iter()
                .enumerate()
                .skip(left + 1)
                .filter_map(move |(right, weight)| {
                    weight.map(|weight| WeightedEdge::new(left, right, weight))
                })
        })
    }
}
