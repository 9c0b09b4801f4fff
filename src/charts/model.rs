#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone)]
pub struct BarPoint {
    pub label: String,
    pub value: i64,
}

impl BarPoint {
    pub fn new(label: impl Into<String>, value: i64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BarSeries {
    pub name: String,
    pub points: Vec<BarPoint>,
    pub orientation: Orientation,
}

impl BarSeries {
    pub fn new(name: impl Into<String>, points: Vec<BarPoint>, orientation: Orientation) -> Self {
        Self {
            name: name.into(),
            points,
            orientation,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BarChartConfig {
    pub padding: f32,
    pub grid_lines: usize,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            padding: 40.0,
            grid_lines: 5,
        }
    }
}
