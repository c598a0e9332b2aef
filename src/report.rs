//! Human readable output for the command line.

use std::fmt::Write;

use crate::raise3d::{BasicInformation, JobInformation, RunningStatus, SystemInformation};

/// `0.45` -> `45.0%`
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Seconds as `H:MM:SS`.
pub fn format_duration(seconds: u64) -> String {
    format!(
        "{}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["KiB", "MiB", "GiB", "TiB", "PiB"];
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64;
    let mut unit = "B";
    for next in UNITS {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = next;
    }
    format!("{:.1} {}", value, unit)
}

pub fn info(info: &SystemInformation) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Name:              {}", info.name);
    let _ = writeln!(out, "Model:             {}", info.model);
    let _ = writeln!(out, "Serial number:     {}", info.serial_number);
    let _ = writeln!(out, "Version:           {}", info.version);
    let _ = writeln!(
        out,
        "Storage available: {}",
        format_bytes(info.storage_available)
    );
    let _ = writeln!(out, "Firmware version:  {}", info.firmware_version);
    let _ = writeln!(out, "API version:       {}", info.api_version);
    let _ = writeln!(out, "Date/time:         {}", info.date_time);
    let _ = writeln!(out, "Update:            {}", info.update);
    out
}

pub fn job(job: &JobInformation) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "File:           {}", job.file_name);
    let _ = writeln!(out, "Status:         {}", job.status);
    let _ = writeln!(out, "Progress:       {}", format_percent(job.progress));
    let _ = writeln!(out, "Time remaining: {}", format_duration(job.remaining()));
    let _ = writeln!(out, "Total time:     {}", format_duration(job.total_time));
    out
}

pub fn status(status: &RunningStatus, basic: &BasicInformation) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Status:              {}", status.status);
    let _ = writeln!(out, "Heatbed temp:        {}", basic.heatbed_temp);
    let _ = writeln!(out, "Target heatbed temp: {}", basic.target_heatbed_temp);
    let _ = writeln!(out, "Fan speed:           {}", basic.fan_speed);
    let _ = writeln!(out, "Target fan speed:    {}", basic.target_fan_speed);
    let _ = writeln!(out, "Feed rate:           {}", basic.feed_rate);
    let _ = writeln!(out, "Target feed rate:    {}", basic.target_feed_rate);
    out
}
