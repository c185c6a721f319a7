use fp8mac_core::common::{FloatOperand, Precision, SignedWeight};
use fp8mac_core::config::{Config, OverflowPolicy};
use fp8mac_core::core::pipeline::Handshake;
use fp8mac_core::MacPipeline;
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn precision(bits: u8) -> Precision {
    Precision::new(bits).unwrap()
}

pub fn weight(value: i32, bits: u8) -> SignedWeight {
    SignedWeight::new(value, precision(bits)).unwrap()
}

/// Builds a config with the given precision and reference exponent, defaults elsewhere.
pub fn config(precision: u8, reference_exponent: u8) -> Config {
    let mut config = Config::default();
    config.multiplier.precision = precision;
    config.accumulator.reference_exponent = reference_exponent;
    config
}

pub struct TestContext {
    pub pipeline: MacPipeline,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// INT4 weights, reference exponent 7, 16-bit wrapping register.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        init_tracing();
        Self {
            pipeline: MacPipeline::new(config).unwrap(),
        }
    }

    /// Precision and reference exponent with a register wide enough to never wrap.
    pub fn wide(precision: u8, reference_exponent: u8) -> Self {
        let mut config = config(precision, reference_exponent);
        config.accumulator.register_bits = 48;
        Self::with_config(&config)
    }

    /// INT4 weights with the given overflow policy, register width, and reference exponent.
    pub fn with_overflow(policy: OverflowPolicy, register_bits: u32, reference_exponent: u8) -> Self {
        let mut config = config(4, reference_exponent);
        config.accumulator.overflow = policy;
        config.accumulator.register_bits = register_bits;
        Self::with_config(&config)
    }

    /// Queues an operand byte and a weight at the pipeline's precision.
    pub fn issue(&mut self, raw: u8, value: i32) {
        let w = SignedWeight::new(value, self.pipeline.precision()).unwrap();
        self.pipeline.push_weight(w).unwrap();
        self.pipeline.push_operand(FloatOperand(raw));
    }

    /// One cycle with `valid` high.
    pub fn step(&mut self) -> Handshake {
        self.pipeline.step(true).unwrap()
    }

    /// `n` cycles with `valid` high, discarding the handshakes.
    pub fn ticks(&mut self, n: usize) {
        for _ in 0..n {
            let _ = self.step();
        }
    }

    /// Steps until `out_valid`, returning the 1-based cycle it was seen on.
    pub fn run_until_valid(&mut self, budget: u64) -> Option<u64> {
        (1..=budget).find(|_| self.step().out_valid)
    }

    pub fn raw(&self) -> i64 {
        self.pipeline.accumulator()
    }

    pub fn scaled(&self) -> f64 {
        self.pipeline.scaled_accumulator()
    }
}
