/// The plotting cycle palette, passed in explicitly rather than read from
/// any process-wide state.
///
/// Each color becomes a `(C0⁺)`, `(C1⁺)`, ... alias entry in the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleConfig {
    colors: Vec<String>,
}

impl CycleConfig {
    /// The conventional default cycle: the same ten values as the tableau
    /// palette, in order.
    pub const DEFAULT_COLORS: [&'static str; 10] = [
        "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
        "#bcbd22", "#17becf",
    ];

    pub fn new(colors: Vec<String>) -> Self {
        Self { colors }
    }

    /// Alias entries as `(name, hex)` pairs, in cycle order.
    pub fn entries(&self) -> impl Iterator<Item = (String, &str)> + '_ {
        self.colors
            .iter()
            .enumerate()
            .map(|(i, hex)| (format!("(C{i}⁺)"), hex.as_str()))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COLORS.iter().map(|s| (*s).to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_are_numbered_in_order() {
        let cycle = CycleConfig::new(vec!["#111111".to_string(), "#222222".to_string()]);
        let entries: Vec<(String, &str)> = cycle.entries().collect();
        assert_eq!(
            entries,
            vec![
                ("(C0⁺)".to_string(), "#111111"),
                ("(C1⁺)".to_string(), "#222222"),
            ]
        );
    }

    #[test]
    fn test_default_cycle_has_ten_colors() {
        let cycle = CycleConfig::default();
        assert_eq!(cycle.len(), 10);
        let last = cycle.entries().last().unwrap();
        assert_eq!(last.0, "(C9⁺)");
        assert_eq!(last.1, "#17becf");
    }
}
