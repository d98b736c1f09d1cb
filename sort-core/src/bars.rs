use crate::types::BarIndex;
use rand::Rng;

#[derive(Debug)]
pub struct BarArray {
    pub values: Vec<u32>,
}

impl BarArray {
    pub fn from_values(values: Vec<u32>) -> Self {
        Self { values }
    }

    pub fn random(len: usize, max_value: u32, rng: &mut impl Rng) -> Self {
        let values = (0..len).map(|_| rng.random_range(0..max_value)).collect();

        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn swap(&mut self, a: BarIndex, b: BarIndex) {
        self.values.swap(a, b);
    }

    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_respects_length_and_value_range() {
        let mut rng = rand::rng();
        let max_value = 100;
        let bars = BarArray::random(24, max_value, &mut rng);

        assert_eq!(bars.len(), 24);
        assert!(bars.values.iter().all(|&v| v < max_value));
    }

    #[test]
    fn is_sorted_detects_order() {
        assert!(BarArray::from_values(vec![1, 2, 2, 5]).is_sorted());
        assert!(!BarArray::from_values(vec![3, 1, 2]).is_sorted());
    }

    #[test]
    fn is_sorted_on_trivial_arrays() {
        assert!(BarArray::from_values(vec![]).is_sorted());
        assert!(BarArray::from_values(vec![7]).is_sorted());
    }

    #[test]
    fn swap_exchanges_adjacent_values() {
        let mut bars = BarArray::from_values(vec![5, 3, 8]);
        bars.swap(0, 1);
        assert_eq!(bars.values, vec![3, 5, 8]);
    }
}
