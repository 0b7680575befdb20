//! Descriptive statistics behind the EEG charts.

/// Count / mean / spread of the signal column, shown above the charts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalSummary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl SignalSummary {
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let (min, max) = min_max(values)?;
        let mean = mean(values);
        Some(Self {
            count: values.len(),
            mean,
            std_dev: std_dev(values, mean),
            min,
            max,
        })
    }
}

/// Equal-width bins over the observed range of the values.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bins are half-open except the last, which also takes the maximum.
    /// A zero range puts every value into a single unit-wide bin centred on it.
    pub fn from_values(values: &[f64], bins: usize) -> Option<Self> {
        let (min, max) = min_max(values)?;
        let bins = bins.max(1);

        let (lo, hi, bins) = if max > min {
            (min, max, bins)
        } else {
            (min - 0.5, max + 0.5, 1)
        };

        let width = (hi - lo) / bins as f64;
        let edges = (0..=bins).map(|i| lo + width * i as f64).collect();
        let mut counts = vec![0usize; bins];
        for &value in values {
            let idx = (((value - lo) / width).floor() as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Some(Self { edges, counts })
    }

    pub fn bin_width(&self) -> f64 {
        match (self.edges.first(), self.edges.last()) {
            (Some(first), Some(last)) if !self.counts.is_empty() => {
                (last - first) / self.counts.len() as f64
            }
            _ => 0.0,
        }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Gaussian kernel density estimate with Scott's bandwidth.
#[derive(Debug, Clone)]
pub struct KernelDensity<'a> {
    values: &'a [f64],
    bandwidth: f64,
}

impl<'a> KernelDensity<'a> {
    /// `None` when the estimate degenerates (fewer than two distinct values).
    pub fn scott(values: &'a [f64]) -> Option<Self> {
        if values.len() < 2 {
            return None;
        }
        let sd = std_dev(values, mean(values));
        let bandwidth = sd * (values.len() as f64).powf(-0.2);
        if !bandwidth.is_finite() || bandwidth <= 0.0 {
            return None;
        }
        Some(Self { values, bandwidth })
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn density(&self, x: f64) -> f64 {
        const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;
        let n = self.values.len() as f64;
        let h = self.bandwidth;
        self.values
            .iter()
            .map(|v| {
                let z = (x - v) / h;
                (-0.5 * z * z).exp()
            })
            .sum::<f64>()
            * INV_SQRT_2PI
            / (n * h)
    }

    /// Evenly spaced `(x, density)` samples across `[lo, hi]`.
    pub fn sample(&self, lo: f64, hi: f64, points: usize) -> Vec<(f64, f64)> {
        let points = points.max(2);
        let step = (hi - lo) / (points - 1) as f64;
        (0..points)
            .map(|i| {
                let x = lo + step * i as f64;
                (x, self.density(x))
            })
            .collect()
    }
}

/// Symmetric Pearson correlation matrix over named columns.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Pairwise-complete correlations. Undefined pairs (zero variance, fewer than
    /// two shared observations) are reported as 0.0; the diagonal is always 1.0.
    pub fn pearson(labels: Vec<String>, columns: &[Vec<Option<f64>>]) -> Self {
        let n = columns.len();
        let mut values = vec![vec![0.0; n]; n];
        for i in 0..n {
            values[i][i] = 1.0;
            for j in (i + 1)..n {
                let r = pearson_pairwise(&columns[i], &columns[j]).unwrap_or(0.0);
                values[i][j] = r;
                values[j][i] = r;
            }
        }
        Self { labels, values }
    }

    pub fn size(&self) -> usize {
        self.labels.len()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row).and_then(|r| r.get(col)).copied()
    }
}

fn pearson_pairwise(a: &[Option<f64>], b: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = a
        .iter()
        .zip(b)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();
    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom <= f64::EPSILON || !denom.is_finite() {
        return None;
    }
    Some((cov / denom).clamp(-1.0, 1.0))
}

pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        0.0
    } else {
        data.iter().sum::<f64>() / data.len() as f64
    }
}

/// Sample standard deviation (n - 1).
pub fn std_dev(data: &[f64], mean: f64) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let variance = data
        .iter()
        .map(|value| {
            let diff = value - mean;
            diff * diff
        })
        .sum::<f64>()
        / (n as f64 - 1.0);
    variance.sqrt()
}

pub fn min_max(data: &[f64]) -> Option<(f64, f64)> {
    data.iter().copied().fold(None, |acc, value| match acc {
        None => Some((value, value)),
        Some((lo, hi)) => Some((lo.min(value), hi.max(value))),
    })
}
