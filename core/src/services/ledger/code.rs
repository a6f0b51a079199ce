//! Verification code generators

use rand::{rngs::OsRng, Rng};

use crate::domain::entities::CODE_LENGTH;

use super::traits::CodeGenerator;

/// Numeric codes drawn from the OS CSPRNG
#[derive(Debug, Clone, Copy)]
pub struct SecureCodeGenerator {
    length: usize,
}

impl SecureCodeGenerator {
    /// Create a generator producing `length` digit codes (clamped to 1..=9)
    pub fn new(length: usize) -> Self {
        Self {
            length: length.clamp(1, 9),
        }
    }
}

impl Default for SecureCodeGenerator {
    fn default() -> Self {
        Self::new(CODE_LENGTH)
    }
}

impl CodeGenerator for SecureCodeGenerator {
    fn generate(&self) -> String {
        let upper = 10u32.pow(self.length as u32);
        let code = OsRng.gen_range(0..upper);
        format!("{:0width$}", code, width = self.length)
    }
}

/// Always issues the same code. Only for demos and tests.
#[derive(Debug, Clone)]
pub struct FixedCodeGenerator {
    code: String,
}

impl FixedCodeGenerator {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

impl CodeGenerator for FixedCodeGenerator {
    fn generate(&self) -> String {
        self.code.clone()
    }
}
