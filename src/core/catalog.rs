//! Builtin unit catalog.
//!
//! The families and labels mirror the Grafana-style alert/panel format
//! catalog that dashboard frontends commonly ship: IEC and SI byte sizes,
//! byte and bit rates, throughput counters, percentages, and wall-clock
//! durations. Values are the canonical identifiers persisted into query
//! state; labels are what the selector displays and searches.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::taxonomy::UnitTaxonomy;
use super::types::UnitOption;

static BUILTIN: LazyLock<UnitTaxonomy> = LazyLock::new(build_catalog);

pub(super) fn builtin() -> &'static UnitTaxonomy {
    &BUILTIN
}

/// Typed names for the categories shipped in the builtin catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KnownCategory {
    Data,
    DataRate,
    Miscellaneous,
    Throughput,
    Time,
}

impl KnownCategory {
    /// Default support-list order for the Y-axis unit selector.
    pub const DEFAULT_SUPPORT: [KnownCategory; 5] = [
        KnownCategory::Data,
        KnownCategory::DataRate,
        KnownCategory::Miscellaneous,
        KnownCategory::Throughput,
        KnownCategory::Time,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            KnownCategory::Data => "Data",
            KnownCategory::DataRate => "Data Rate",
            KnownCategory::Miscellaneous => "Miscellaneous",
            KnownCategory::Throughput => "Throughput",
            KnownCategory::Time => "Time",
        }
    }
}

fn build_catalog() -> UnitTaxonomy {
    let mut taxonomy = UnitTaxonomy::default();
    taxonomy.insert_category(KnownCategory::Data.name(), data_units());
    taxonomy.insert_category(KnownCategory::DataRate.name(), data_rate_units());
    taxonomy.insert_category(KnownCategory::Miscellaneous.name(), miscellaneous_units());
    taxonomy.insert_category(KnownCategory::Throughput.name(), throughput_units());
    taxonomy.insert_category(KnownCategory::Time.name(), time_units());
    taxonomy
}

fn option(value: &str, label: &str) -> UnitOption {
    UnitOption::new(value, label)
}

fn data_units() -> Vec<UnitOption> {
    vec![
        option("bytes", "bytes(IEC)"),
        option("decbytes", "bytes(SI)"),
        option("bits", "bits(IEC)"),
        option("decbits", "bits(SI)"),
        option("kbytes", "kibibytes"),
        option("deckbytes", "kilobytes"),
        option("mbytes", "mebibytes"),
        option("decmbytes", "megabytes"),
        option("gbytes", "gibibytes"),
        option("decgbytes", "gigabytes"),
        option("tbytes", "tebibytes"),
        option("dectbytes", "terabytes"),
        option("pbytes", "pebibytes"),
        option("decpbytes", "petabytes"),
    ]
}

fn data_rate_units() -> Vec<UnitOption> {
    vec![
        option("pps", "packets/sec"),
        option("binBps", "bytes/sec(IEC)"),
        option("Bps", "bytes/sec(SI)"),
        option("binbps", "bits/sec(IEC)"),
        option("bps", "bits/sec(SI)"),
        option("KiBs", "kibibytes/sec"),
        option("Kibits", "kibibits/sec"),
        option("KBs", "kilobytes/sec"),
        option("Kbits", "kilobits/sec"),
        option("MiBs", "mebibytes/sec"),
        option("Mibits", "mebibits/sec"),
        option("MBs", "megabytes/sec"),
        option("Mbits", "megabits/sec"),
        option("GiBs", "gibibytes/sec"),
        option("Gibits", "gibibits/sec"),
        option("GBs", "gigabytes/sec"),
        option("Gbits", "gigabits/sec"),
        option("TiBs", "tebibytes/sec"),
        option("Tibits", "tebibits/sec"),
        option("TBs", "terabytes/sec"),
        option("Tbits", "terabits/sec"),
        option("PiBs", "pebibytes/sec"),
        option("Pibits", "pebibits/sec"),
        option("PBs", "petabytes/sec"),
        option("Pbits", "petabits/sec"),
    ]
}

fn miscellaneous_units() -> Vec<UnitOption> {
    vec![
        option("none", "none"),
        option("short", "short"),
        option("percent", "percent (0-100)"),
        option("percentunit", "percent (0.0-1.0)"),
    ]
}

fn throughput_units() -> Vec<UnitOption> {
    vec![
        option("cps", "counts/sec (cps)"),
        option("ops", "ops/sec (ops)"),
        option("reqps", "requests/sec (reqps)"),
        option("rps", "reads/sec (rps)"),
        option("wps", "writes/sec (wps)"),
        option("iops", "I/O ops/sec (iops)"),
        option("cpm", "counts/min (cpm)"),
        option("opm", "ops/min (opm)"),
        option("rpm", "reads/min (rpm)"),
        option("wpm", "writes/min (wpm)"),
    ]
}

fn time_units() -> Vec<UnitOption> {
    vec![
        option("ns", "nanoseconds (ns)"),
        option("µs", "microseconds (µs)"),
        option("ms", "milliseconds (ms)"),
        option("s", "seconds (s)"),
        option("m", "minutes (m)"),
        option("h", "hours (h)"),
        option("d", "days (d)"),
    ]
}
