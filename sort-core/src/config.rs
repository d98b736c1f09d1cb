#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub bar_count: usize,
    pub max_value: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bar_count: 24,
            max_value: 256,
        }
    }
}
