use itertools::Itertools;

/// Variables set aside as dense before the elimination starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct DenseNodes {
    /// a variable is dense if its degree is strictly greater
    pub threshold: usize,
    /// dense variables, ascending
    pub nodes: Vec<usize>,
}

impl DenseNodes {
    pub fn count(&self) -> usize {
        self.nodes.len()
    }
}

/// Degree above which a variable of an `n` node graph is dense.
///
/// `max(16, alpha * sqrt(n))`, truncated and capped at `n`.  A
/// negative `alpha` pushes the threshold to `n - 2` before the cap.
pub(crate) fn dense_threshold(alpha: f64, n: usize) -> usize {
    let dense = if alpha < 0.0 {
        n.saturating_sub(2)
    } else {
        // saturating float to integer conversion
        (alpha * (n as f64).sqrt()) as usize
    };
    dense.max(16).min(n)
}

/// Flags the variables whose degree exceeds the dense threshold.
pub(crate) fn classify(degrees: &[usize], alpha: f64) -> DenseNodes {
    let threshold = dense_threshold(alpha, degrees.len());
    let nodes = degrees.iter().positions(|&d| d > threshold).collect();
    DenseNodes { threshold, nodes }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dense_threshold() {
        assert_eq!(dense_threshold(10.0, 4), 4);
        assert_eq!(dense_threshold(10.0, 100), 100);
        assert_eq!(dense_threshold(10.0, 400), 200);
        assert_eq!(dense_threshold(1.0, 400), 20);
        assert_eq!(dense_threshold(1.0, 30), 16);
        assert_eq!(dense_threshold(-1.0, 1000), 998);
        assert_eq!(dense_threshold(-1.0, 1), 1);
        assert_eq!(dense_threshold(f64::INFINITY, 50), 50);
        assert_eq!(dense_threshold(0.0, 0), 0);
    }

    #[test]
    fn test_classify() {
        let mut degrees = vec![1; 400];
        degrees[0] = 399;
        degrees[7] = 200;
        degrees[9] = 201;
        let dense = classify(&degrees, 10.0);
        assert_eq!(dense.threshold, 200);
        assert_eq!(dense.nodes, vec![0, 9]);
        assert_eq!(dense.count(), 2);

        // a negative multiplier only flags rows that are nearly full
        assert_eq!(classify(&degrees, -1.0).nodes, vec![0]);
        assert_eq!(classify(&[3, 3, 3, 3], 10.0).count(), 0);
    }
}
