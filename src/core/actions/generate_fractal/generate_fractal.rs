use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::generate_fractal::errors::GenerateFractalError;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Computes every pixel of the algorithm's region in raster order.
///
/// Results are row-major: index `y * width + x`.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    generate_fractal_cancelable(algorithm, &NeverCancel).map_err(|e| match e {
        GenerateFractalError::Algorithm(alg_err) => alg_err,
        GenerateFractalError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Like [`generate_fractal`], polling `cancel` every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels.
pub fn generate_fractal_cancelable<Alg, C>(
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm,
    C: CancelToken,
{
    let region = algorithm.region();
    let width = region.width();
    let height = region.height();
    let mut results = Vec::with_capacity(region.size());

    let pixels = (0..height).flat_map(|y| (0..width).map(move |x| Point { x, y }));

    for (i, pixel) in pixels.enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(GenerateFractalError::Cancelled(Cancelled));
        }

        let result = algorithm
            .compute(pixel)
            .map_err(GenerateFractalError::Algorithm)?;
        results.push(result);
    }

    Ok(results)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::data::plot_region::PlotRegion;
    use num_complex::Complex64;
    use std::error::Error;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Debug, PartialEq)]
    pub(crate) struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    pub(crate) struct StubSuccessAlgorithm {
        pub(crate) region: PlotRegion,
    }

    impl StubSuccessAlgorithm {
        pub(crate) fn new(width: u32, height: u32) -> Self {
            Self {
                region: PlotRegion::new(width, height, 4.0, Complex64::new(0.0, 0.0)).unwrap(),
            }
        }
    }

    impl FractalAlgorithm for StubSuccessAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok(u64::from(pixel.y) * 1000 + u64::from(pixel.x))
        }

        fn region(&self) -> &PlotRegion {
            &self.region
        }
    }

    #[derive(Debug)]
    pub(crate) struct StubFailureAlgorithm {
        pub(crate) region: PlotRegion,
    }

    impl FractalAlgorithm for StubFailureAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, _: Point) -> Result<Self::Success, Self::Failure> {
            Err(StubError {})
        }

        fn region(&self) -> &PlotRegion {
            &self.region
        }
    }

    #[test]
    fn test_generates_row_major_results() {
        let algorithm = StubSuccessAlgorithm::new(3, 2);

        let results = generate_fractal(&algorithm).unwrap();

        assert_eq!(results, vec![0, 1, 2, 1000, 1001, 1002]);
    }

    #[test]
    fn test_single_pixel_region() {
        let algorithm = StubSuccessAlgorithm::new(1, 1);

        assert_eq!(generate_fractal(&algorithm).unwrap(), vec![0]);
    }

    #[test]
    fn test_propagates_algorithm_failure() {
        let algorithm = StubFailureAlgorithm {
            region: StubSuccessAlgorithm::new(3, 4).region,
        };

        assert_eq!(generate_fractal(&algorithm), Err(StubError {}));
    }

    #[test]
    fn test_cancelable_returns_cancelled_when_token_is_cancelled() {
        let algorithm = StubSuccessAlgorithm::new(10, 8);
        let cancelled = AtomicBool::new(true);
        let cancel_token = || cancelled.load(Ordering::Relaxed);

        let result = generate_fractal_cancelable(&algorithm, &cancel_token);

        assert!(matches!(result, Err(GenerateFractalError::Cancelled(_))));
    }

    #[test]
    fn test_cancelable_polls_every_interval() {
        let algorithm = StubSuccessAlgorithm::new(1000, 3);
        let poll_count = AtomicUsize::new(0);
        let cancel_token = || {
            poll_count.fetch_add(1, Ordering::Relaxed);
            false
        };

        let result = generate_fractal_cancelable(&algorithm, &cancel_token);

        assert!(result.is_ok());
        // pixels 0, 1024 and 2048
        assert_eq!(poll_count.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn test_generate_fractal_error_display() {
        let cancelled: GenerateFractalError<StubError> = GenerateFractalError::Cancelled(Cancelled);
        let failed: GenerateFractalError<StubError> = GenerateFractalError::Algorithm(StubError {});

        assert_eq!(cancelled.to_string(), "operation cancelled");
        assert_eq!(failed.to_string(), "algorithm error: StubError");
    }
}
