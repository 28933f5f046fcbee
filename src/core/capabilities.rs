use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single ML capability as the host's authorization layer names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MlCapability {
    CanGetJobs,
    CanCreateJob,
    CanDeleteJob,
    CanOpenJob,
    CanCloseJob,
    CanUpdateJob,
    CanForecastJob,
    CanGetDatafeeds,
    CanStartStopDatafeed,
    CanUpdateDatafeed,
    CanPreviewDatafeed,
    CanGetCalendars,
    CanCreateCalendar,
    CanDeleteCalendar,
    CanGetFilters,
    CanCreateFilter,
    CanDeleteFilter,
    CanFindFileStructure,
    CanGetDataFrameAnalytics,
    CanCreateDataFrameAnalytics,
    CanDeleteDataFrameAnalytics,
    CanStartStopDataFrameAnalytics,
}

impl MlCapability {
    pub const ALL: [MlCapability; 22] = [
        MlCapability::CanGetJobs,
        MlCapability::CanCreateJob,
        MlCapability::CanDeleteJob,
        MlCapability::CanOpenJob,
        MlCapability::CanCloseJob,
        MlCapability::CanUpdateJob,
        MlCapability::CanForecastJob,
        MlCapability::CanGetDatafeeds,
        MlCapability::CanStartStopDatafeed,
        MlCapability::CanUpdateDatafeed,
        MlCapability::CanPreviewDatafeed,
        MlCapability::CanGetCalendars,
        MlCapability::CanCreateCalendar,
        MlCapability::CanDeleteCalendar,
        MlCapability::CanGetFilters,
        MlCapability::CanCreateFilter,
        MlCapability::CanDeleteFilter,
        MlCapability::CanFindFileStructure,
        MlCapability::CanGetDataFrameAnalytics,
        MlCapability::CanCreateDataFrameAnalytics,
        MlCapability::CanDeleteDataFrameAnalytics,
        MlCapability::CanStartStopDataFrameAnalytics,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MlCapability::CanGetJobs => "canGetJobs",
            MlCapability::CanCreateJob => "canCreateJob",
            MlCapability::CanDeleteJob => "canDeleteJob",
            MlCapability::CanOpenJob => "canOpenJob",
            MlCapability::CanCloseJob => "canCloseJob",
            MlCapability::CanUpdateJob => "canUpdateJob",
            MlCapability::CanForecastJob => "canForecastJob",
            MlCapability::CanGetDatafeeds => "canGetDatafeeds",
            MlCapability::CanStartStopDatafeed => "canStartStopDatafeed",
            MlCapability::CanUpdateDatafeed => "canUpdateDatafeed",
            MlCapability::CanPreviewDatafeed => "canPreviewDatafeed",
            MlCapability::CanGetCalendars => "canGetCalendars",
            MlCapability::CanCreateCalendar => "canCreateCalendar",
            MlCapability::CanDeleteCalendar => "canDeleteCalendar",
            MlCapability::CanGetFilters => "canGetFilters",
            MlCapability::CanCreateFilter => "canCreateFilter",
            MlCapability::CanDeleteFilter => "canDeleteFilter",
            MlCapability::CanFindFileStructure => "canFindFileStructure",
            MlCapability::CanGetDataFrameAnalytics => "canGetDataFrameAnalytics",
            MlCapability::CanCreateDataFrameAnalytics => "canCreateDataFrameAnalytics",
            MlCapability::CanDeleteDataFrameAnalytics => "canDeleteDataFrameAnalytics",
            MlCapability::CanStartStopDataFrameAnalytics => "canStartStopDataFrameAnalytics",
        }
    }
}

impl fmt::Display for MlCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown name '{0}'")]
pub struct UnknownName(pub String);

impl FromStr for MlCapability {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MlCapability::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}

/// Operations exposed by the gated providers.
///
/// Each one maps to exactly one method of the wrapped service and carries a
/// fixed list of capabilities the caller must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatedOperation {
    Recognize,
    GetModule,
    ListModules,
    SetupModuleItems,
    GetAnomaliesTableData,
}

impl GatedOperation {
    pub const ALL: [GatedOperation; 5] = [
        GatedOperation::Recognize,
        GatedOperation::GetModule,
        GatedOperation::ListModules,
        GatedOperation::SetupModuleItems,
        GatedOperation::GetAnomaliesTableData,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GatedOperation::Recognize => "recognize",
            GatedOperation::GetModule => "getModule",
            GatedOperation::ListModules => "listModules",
            GatedOperation::SetupModuleItems => "setupModuleItems",
            GatedOperation::GetAnomaliesTableData => "getAnomaliesTableData",
        }
    }

    /// Name of the wrapped service method the operation delegates to.
    pub fn delegate_name(&self) -> &'static str {
        match self {
            GatedOperation::Recognize => "findMatches",
            GatedOperation::GetModule => "getModule",
            GatedOperation::ListModules => "listModules",
            GatedOperation::SetupModuleItems => "setupModuleItems",
            GatedOperation::GetAnomaliesTableData => "getAnomaliesTableData",
        }
    }

    pub fn required_capabilities(&self) -> &'static [MlCapability] {
        match self {
            GatedOperation::Recognize => &[MlCapability::CanCreateJob],
            GatedOperation::GetModule => &[MlCapability::CanGetJobs],
            GatedOperation::ListModules => &[MlCapability::CanGetJobs],
            GatedOperation::SetupModuleItems => &[MlCapability::CanCreateJob],
            GatedOperation::GetAnomaliesTableData => &[MlCapability::CanGetJobs],
        }
    }
}

impl fmt::Display for GatedOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GatedOperation {
    type Err = UnknownName;

    // Accepts both `getModule` and `get-module`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s.chars().filter(|c| *c != '-' && *c != '_').collect();
        GatedOperation::ALL
            .iter()
            .copied()
            .find(|op| op.name().eq_ignore_ascii_case(&folded))
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}
