//! Utilities for working with probabilities.

pub trait SliceExt {
    fn sum(&self) -> f64;
    fn exp(&mut self);
    fn add_scaled(&mut self, factor: f64, addend: &[f64]);
    fn add(&mut self, addend: &[f64]);
    fn divide(&mut self, divisors: &[f64]);
}
impl SliceExt for [f64] {
    fn sum(&self) -> f64 {
        self.iter().sum()
    }

    fn exp(&mut self) {
        for element in self {
            *element = element.exp();
        }
    }

    fn add_scaled(&mut self, factor: f64, addend: &[f64]) {
        debug_assert_eq!(
            self.len(),
            addend.len(),
            "length of addend {} does not match length of target {}",
            addend.len(),
            self.len()
        );
        for (element, &value) in self.iter_mut().zip(addend) {
            *element += factor * value;
        }
    }

    fn add(&mut self, addend: &[f64]) {
        debug_assert_eq!(
            self.len(),
            addend.len(),
            "length of addend {} does not match length of target {}",
            addend.len(),
            self.len()
        );
        for (element, &value) in self.iter_mut().zip(addend) {
            *element += value;
        }
    }

    fn divide(&mut self, divisors: &[f64]) {
        debug_assert_eq!(
            self.len(),
            divisors.len(),
            "number of divisors {} does not match length of target {}",
            divisors.len(),
            self.len()
        );
        for (element, &divisor) in self.iter_mut().zip(divisors) {
            *element /= divisor;
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;

    use crate::testing::assert_slice_f64_relative;

    use super::*;

    #[test]
    fn sum() {
        let data = [0.0, 0.1, 0.2];
        assert_f64_near!(0.3, data.sum(), 1);
    }

    #[test]
    fn exp() {
        let mut data = [0.0, 1.0, -1.0];
        data.exp();
        assert_slice_f64_relative(&[1.0, std::f64::consts::E, 1.0 / std::f64::consts::E], &data, 1e-15);
    }

    #[test]
    fn add_scaled() {
        let mut data = [0.1; 3];
        data.add_scaled(-0.5, &[2.0, 1.0, 3.0]);
        assert_eq!([0.1 + -0.5 * 2.0, 0.1 + -0.5 * 1.0, 0.1 + -0.5 * 3.0], data);
    }

    #[test]
    fn add() {
        let mut data = [1.0, 2.0];
        data.add(&[0.5, -3.0]);
        assert_eq!([1.5, -1.0], data);
    }

    #[test]
    fn divide() {
        let mut data = [1.0, 3.0, 1.0];
        data.divide(&[2.0, -1.5, 0.0]);
        assert_eq!([0.5, -2.0], data[..2]);
        assert!(data[2].is_infinite());
    }
}
