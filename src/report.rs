// Report printer: turns a decoded `Response` into plain text.
// Writers and time zones are parameters so output is deterministic in tests;
// the binary passes stdout and `chrono::Local`.

use std::fmt::Display;
use std::io::{self, Write};

use chrono::TimeZone;

use crate::labels::LabelSet;
use crate::models::{PvPZone, Realm, Response};

/// Write one block per realm, in the order the API returned them.
pub fn write_report<W, Tz>(
    out: &mut W,
    response: &Response,
    labels: &LabelSet,
    verbose: bool,
    tz: &Tz,
) -> io::Result<()>
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    for realm in &response.realms {
        write_realm(out, realm, labels, verbose, tz)?;
    }
    Ok(())
}

/// Write a single realm block. Verbose output only appends lines, so the
/// leading lines are the same in both modes.
pub fn write_realm<W, Tz>(
    out: &mut W,
    realm: &Realm,
    labels: &LabelSet,
    verbose: bool,
    tz: &Tz,
) -> io::Result<()>
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    writeln!(out)?;
    writeln!(out, "{}: {}", labels.realm, realm.name)?;
    writeln!(out, "{}: {}", labels.status, labels.realm_status(realm.status))?;
    writeln!(out, "{}: {}", labels.population, realm.population)?;
    writeln!(out, "{}: {}", labels.queue, labels.queue_state(realm.queue))?;

    if verbose {
        writeln!(out, "{}: {}", labels.realm_type, realm.realm_type)?;
        writeln!(out, "{}: {}", labels.battlegroup, realm.battlegroup)?;
        write_zone(out, labels.tol_barad, &realm.tol_barad, labels, tz)?;
        write_zone(out, labels.wintergrasp, &realm.wintergrasp, labels, tz)?;
    }
    Ok(())
}

fn write_zone<W, Tz>(
    out: &mut W,
    zone_name: &str,
    zone: &PvPZone,
    labels: &LabelSet,
    tz: &Tz,
) -> io::Result<()>
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    writeln!(
        out,
        "{}: {} ({}) -- {}: {}",
        zone_name,
        labels.faction(zone.controlling_faction),
        zone.status.label(),
        labels.next_battle,
        format_next_battle(zone.next, tz, labels.unknown),
    )
}

/// Render an epoch-millisecond timestamp in `tz`. Milliseconds are dropped
/// by truncating toward zero, so -1500 ms is one second before the epoch.
/// Values chrono cannot represent render as `fallback`.
pub fn format_next_battle<Tz>(epoch_ms: i64, tz: &Tz, fallback: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match tz.timestamp_opt(epoch_ms / 1000, 0).single() {
        Some(when) => when.format("%Y-%m-%d %H:%M:%S %z").to_string(),
        None => fallback.to_string(),
    }
}
