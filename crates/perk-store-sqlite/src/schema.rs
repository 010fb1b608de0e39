//! SQL schema for the Perk SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS users (
    username  TEXT PRIMARY KEY,
    email     TEXT NOT NULL,
    password  TEXT NOT NULL
);

-- Seeded out of band; never written by request handling.
CREATE TABLE IF NOT EXISTS products (
    tier_label   TEXT PRIMARY KEY,
    description  TEXT NOT NULL,
    points       INTEGER NOT NULL
);

-- Purchases are strictly append-only.
-- No UPDATE or DELETE is ever issued against this table.
-- `username` is deliberately not a foreign key: orphan events are accepted.
CREATE TABLE IF NOT EXISTS purchases (
    awarded_at  TEXT NOT NULL,    -- fixed-width RFC 3339 UTC, microseconds
    points      INTEGER NOT NULL, -- -9999 marks an unknown tier
    username    TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS purchases_user_time_idx ON purchases(username, awarded_at);
CREATE INDEX IF NOT EXISTS purchases_time_idx      ON purchases(awarded_at);

PRAGMA user_version = 1;
";
