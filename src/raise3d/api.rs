use serde::{Deserialize, Serialize};

/// Wrapper shared by every endpoint response.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Envelope<T> {
    pub status: i64,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<ResponseError>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.status == 1
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ResponseError {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub msg: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LoginData {
    pub token: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct SystemInformation {
    pub api_version: String,
    pub date_time: String,
    pub firmware_version: String,
    pub model: String,
    #[serde(rename = "machine_name")]
    pub name: String,
    #[serde(rename = "Serial_number")]
    pub serial_number: String,
    pub storage_available: u64,
    pub update: String,
    pub version: String,
}

#[derive(Copy, Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PrinterState {
    Idle,
    Paused,
    Running,
    Busy,
    Completed,
    Error,
}

#[derive(Copy, Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct RunningStatus {
    #[serde(rename = "running_status")]
    pub status: PrinterState,
}

#[derive(Copy, Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct BasicInformation {
    #[serde(rename = "fan_cur_speed")]
    pub fan_speed: f64,
    #[serde(rename = "fan_tar_speed")]
    pub target_fan_speed: f64,
    #[serde(rename = "feed_cur_rate")]
    pub feed_rate: f64,
    #[serde(rename = "feed_tar_rate")]
    pub target_feed_rate: f64,
    #[serde(rename = "heatbed_cur_temp")]
    pub heatbed_temp: f64,
    #[serde(rename = "heatbed_tar_temp")]
    pub target_heatbed_temp: f64,
}

#[derive(Copy, Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Paused,
    Running,
    Completed,
    Stopped,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct JobInformation {
    pub file_name: String,
    /// Fraction in `[0, 1]`. The wire carries a percentage.
    #[serde(rename = "print_progress", with = "percent")]
    pub progress: f64,
    #[serde(rename = "job_status")]
    pub status: JobStatus,
    /// Seconds.
    #[serde(rename = "printed_time")]
    pub elapsed_time: u64,
    /// Seconds.
    #[serde(rename = "total_time")]
    pub total_time: u64,
}

impl JobInformation {
    /// Seconds left, zero once the printer overshoots its estimate.
    pub fn remaining(&self) -> u64 {
        self.total_time.saturating_sub(self.elapsed_time)
    }
}

mod percent {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(fraction: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(fraction * 100.0)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        f64::deserialize(deserializer).map(|percent| percent / 100.0)
    }
}
