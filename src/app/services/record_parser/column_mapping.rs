//! Column mapping for the source table header
//!
//! Resolves the configured column names to CSV field indices once per file so
//! that rows are read by position rather than by repeated name lookups.

use crate::app::models::Measurement;
use crate::config::ColumnNames;
use crate::constants::BYTE_ORDER_MARK;
use crate::constants::columns::features;
use csv::StringRecord;
use std::collections::HashMap;

/// Resolved column positions for one source file
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Column name to index mapping
    pub name_to_index: HashMap<String, usize>,

    /// Configured name of the date column (for error messages)
    pub date_column: String,

    pub date: Option<usize>,
    pub sst: Option<usize>,
    pub chl: Option<usize>,
    pub ssha: Option<usize>,
    pub longitude: Option<usize>,
    pub latitude: Option<usize>,
    pub individual_id: Option<usize>,

    /// Positions of the optional context columns
    pub features: FeatureColumns,
}

/// Positions of the context columns carried into detail listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureColumns {
    pub sst_gradient: Option<usize>,
    pub thermal_front_strength: Option<usize>,
    pub chl_gradient: Option<usize>,
    pub productivity_index: Option<usize>,
    pub ssha_gradient: Option<usize>,
    pub is_in_eddy: Option<usize>,
    pub eddy_type: Option<usize>,
    pub dist_to_eddy_center_km: Option<usize>,
    pub daily_movement_km: Option<usize>,
    pub ocean_complexity_score: Option<usize>,
}

impl FeatureColumns {
    fn resolve(name_to_index: &HashMap<String, usize>) -> Self {
        let resolve = |name: &str| resolve_index(name_to_index, name);

        Self {
            sst_gradient: resolve(features::SST_GRADIENT),
            thermal_front_strength: resolve(features::THERMAL_FRONT_STRENGTH),
            chl_gradient: resolve(features::CHL_GRADIENT),
            productivity_index: resolve(features::PRODUCTIVITY_INDEX),
            ssha_gradient: resolve(features::SSHA_GRADIENT),
            is_in_eddy: resolve(features::IS_IN_EDDY),
            eddy_type: resolve(features::EDDY_TYPE),
            dist_to_eddy_center_km: resolve(features::DIST_TO_EDDY_CENTER),
            daily_movement_km: resolve(features::DAILY_MOVEMENT),
            ocean_complexity_score: resolve(features::OCEAN_COMPLEXITY_SCORE),
        }
    }
}

impl ColumnMapping {
    /// Analyze column headers against the configured column names
    ///
    /// Names are matched exactly after trimming; when no exact match exists an
    /// ASCII case-insensitive match is accepted.
    pub fn analyze(headers: &StringRecord, columns: &ColumnNames) -> Self {
        let mut name_to_index = HashMap::new();

        for (index, header) in headers.iter().enumerate() {
            let column_name = header.trim().trim_start_matches(BYTE_ORDER_MARK).trim();
            // First occurrence wins for duplicated headers
            name_to_index
                .entry(column_name.to_string())
                .or_insert(index);
        }

        let resolve = |name: &str| resolve_index(&name_to_index, name);

        ColumnMapping {
            date: resolve(&columns.date),
            sst: resolve(&columns.sst),
            chl: resolve(&columns.chl),
            ssha: resolve(&columns.ssha),
            longitude: resolve(&columns.longitude),
            latitude: resolve(&columns.latitude),
            individual_id: resolve(&columns.individual_id),
            features: FeatureColumns::resolve(&name_to_index),
            date_column: columns.date.clone(),
            name_to_index,
        }
    }

    /// Index of a measurement column
    pub fn measurement_index(&self, measurement: Measurement) -> Option<usize> {
        match measurement {
            Measurement::Sst => self.sst,
            Measurement::Chl => self.chl,
            Measurement::Ssha => self.ssha,
        }
    }

    /// Measurement columns that are not present in the header
    pub fn missing_measurements(&self) -> Vec<Measurement> {
        Measurement::ALL
            .into_iter()
            .filter(|&m| self.measurement_index(m).is_none())
            .collect()
    }
}

fn resolve_index(name_to_index: &HashMap<String, usize>, name: &str) -> Option<usize> {
    let wanted = name.trim();
    name_to_index.get(wanted).copied().or_else(|| {
        name_to_index
            .iter()
            .filter(|(column, _)| column.eq_ignore_ascii_case(wanted))
            .map(|(_, &index)| index)
            .min()
    })
}
