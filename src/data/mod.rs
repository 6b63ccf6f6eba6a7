//! Dataset registry: the static datasets and the shared color palette

mod palette;

pub use palette::{ColorError, Palette, Rgb};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("dataset '{dataset}' has no metric '{key}' on record '{record}'")]
    MissingMetric {
        dataset: &'static str,
        record: &'static str,
        key: String,
    },
    #[error("dataset '{dataset}': record '{record}' has different metric keys")]
    InconsistentKeys {
        dataset: &'static str,
        record: &'static str,
    },
}

/// One labeled row of a dataset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub label: &'static str,
    pub metrics: &'static [(&'static str, f64)],
}

impl Record {
    pub fn metric(&self, key: &str) -> Option<f64> {
        self.metrics
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| *value)
    }

    fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.metrics.iter().map(|(name, _)| *name)
    }
}

/// Ordered collection of records; order is display order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dataset {
    pub name: &'static str,
    pub records: &'static [Record],
}

impl Dataset {
    pub fn labels(&self) -> Vec<String> {
        self.records.iter().map(|r| r.label.to_string()).collect()
    }

    pub fn values(&self, key: &str) -> Result<Vec<f64>, DataError> {
        self.records
            .iter()
            .map(|record| {
                record.metric(key).ok_or_else(|| DataError::MissingMetric {
                    dataset: self.name,
                    record: record.label,
                    key: key.to_string(),
                })
            })
            .collect()
    }

    pub fn metric_keys(&self) -> Vec<&'static str> {
        self.records
            .first()
            .map(|record| record.keys().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every record must carry the same metric key set as the first one.
    pub fn validate(&self) -> Result<(), DataError> {
        let expected = self.metric_keys();
        for record in self.records {
            let same_len = record.metrics.len() == expected.len();
            if !same_len || !record.keys().all(|key| expected.contains(&key)) {
                return Err(DataError::InconsistentKeys {
                    dataset: self.name,
                    record: record.label,
                });
            }
        }
        Ok(())
    }
}

pub const CUSTOMER_COMPLAINTS: Dataset = Dataset {
    name: "customer_complaints",
    records: &[
        Record {
            label: "Damaged Goods",
            metrics: &[("value", 50.0)],
        },
        Record {
            label: "Incorrect Items",
            metrics: &[("value", 30.0)],
        },
        Record {
            label: "Delayed Shipments",
            metrics: &[("value", 20.0)],
        },
    ],
};

pub const SUPPLIER_DEFECTS: Dataset = Dataset {
    name: "supplier_defects",
    records: &[
        Record {
            label: "Supplier A",
            metrics: &[("rate", 5.0)],
        },
        Record {
            label: "Supplier B",
            metrics: &[("rate", 12.0)],
        },
        Record {
            label: "Supplier C",
            metrics: &[("rate", 3.0)],
        },
    ],
};

pub const SHIFT_PERFORMANCE: Dataset = Dataset {
    name: "shift_performance",
    records: &[
        Record {
            label: "Morning Shift",
            metrics: &[("onTime", 85.0), ("defectRate", 8.0)],
        },
        Record {
            label: "Evening Shift",
            metrics: &[("onTime", 70.0), ("defectRate", 12.0)],
        },
    ],
};

pub const MONTHLY_TRENDS: Dataset = Dataset {
    name: "monthly_trends",
    records: &[
        Record {
            label: "Jan",
            metrics: &[("returns", 5.0), ("complaints", 8.0)],
        },
        Record {
            label: "Feb",
            metrics: &[("returns", 7.0), ("complaints", 10.0)],
        },
        Record {
            label: "Mar",
            metrics: &[("returns", 10.0), ("complaints", 15.0)],
        },
        Record {
            label: "Apr",
            metrics: &[("returns", 15.0), ("complaints", 20.0)],
        },
    ],
};

/// Read-only access to everything the dashboard plots
#[derive(Debug, Clone)]
pub struct Registry {
    pub complaints: Dataset,
    pub suppliers: Dataset,
    pub shifts: Dataset,
    pub trends: Dataset,
    pub palette: Palette,
}

impl Registry {
    pub fn builtin() -> Self {
        Self {
            complaints: CUSTOMER_COMPLAINTS,
            suppliers: SUPPLIER_DEFECTS,
            shifts: SHIFT_PERFORMANCE,
            trends: MONTHLY_TRENDS,
            palette: Palette::default(),
        }
    }

    pub fn datasets(&self) -> [&Dataset; 4] {
        [&self.complaints, &self.suppliers, &self.shifts, &self.trends]
    }

    pub fn validate(&self) -> Result<(), DataError> {
        self.datasets().iter().try_for_each(|dataset| dataset.validate())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
