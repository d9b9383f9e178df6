use ndarray::Array2;

/// The dimensions `(rows, cols)` of `shape`, if it has exactly two.
pub fn surface_dims(shape: &[usize]) -> Option<(usize, usize)> {
    match *shape {
        [d0, d1] => Some((d0, d1)),
        _ => None,
    }
}

/// A named two-dimensional dataset, held in memory as `f64`.
#[derive(Debug, Clone)]
pub struct Surface {
    name: String,
    values: Array2<f64>,
}

impl Surface {
    pub fn new<S: Into<String>>(name: S, values: Array2<f64>) -> Surface {
        Surface {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn dims(&self) -> (usize, usize) {
        self.values.dim()
    }

    /// Global minimum and maximum of the values.
    ///
    /// Non-finite values (NaN, inf) are skipped. Fails if there are no finite values.
    pub fn value_range(&self) -> Result<(f64, f64), anyhow::Error> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
            })
            .ok_or_else(|| anyhow!("dataset '{}' has no finite values", self.name))
    }
}
