use crate::config::DemoConfig;
use crate::core::{add, divide, factorial, greet, multiply, primes_in};
use crate::domain::model::{AppInfo, DemoReport, Number};
use crate::utils::error::Result;

pub struct DemoRunner {
    config: DemoConfig,
}

impl DemoRunner {
    pub fn new(config: DemoConfig) -> Self {
        Self { config }
    }

    /// 依固定順序執行所有運算並收集結果
    pub fn run(&self) -> Result<DemoReport> {
        let a = Number::from(self.config.operands.a);
        let b = Number::from(self.config.operands.b);

        let sum = add(a, b);
        tracing::debug!("add({}, {}) = {}", a, b, sum);

        let product = multiply(a, b);
        tracing::debug!("multiply({}, {}) = {}", a, b, product);

        let quotient = divide(a, b)?;
        tracing::debug!("divide({}, {}) = {}", a, b, quotient);

        let factorial_input = self.config.factorial.n;
        let factorial_result = factorial(factorial_input)?;
        tracing::debug!("factorial({}) = {}", factorial_input, factorial_result);

        let prime_candidates = self.config.primes.candidates.clone();
        let primes = primes_in(&prime_candidates);
        tracing::debug!("primes in {:?}: {:?}", prime_candidates, primes);

        let greeting = greet(&self.config.greeting.name);

        tracing::info!("Demo sequence finished");

        Ok(DemoReport {
            a,
            b,
            sum,
            product,
            quotient,
            factorial_input,
            factorial_result,
            prime_candidates,
            primes,
            greeting,
            app: AppInfo {
                version: self.config.app.version.clone(),
                environment: self.config.app.environment.clone(),
                status: "All systems operational".to_string(),
            },
        })
    }
}
