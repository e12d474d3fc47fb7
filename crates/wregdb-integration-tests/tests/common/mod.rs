//! Shared fixtures for the integration tests.

#![allow(dead_code)]

/// A database excerpt in the upstream `regulatory.db` layout: a world
/// domain, a `wmmrule` block, and four countries covering every DFS region.
pub const REGDB: &str = "\
# This is the world regulatory domain
country 00:
\t(2402 - 2472 @ 40), (20)
\t# Channel 12 - 13.
\t(2457 - 2482 @ 20), (20), NO-IR, AUTO-BW
\t# Channel 14. Only JP enables this and for 802.11b only
\t(2474 - 2494 @ 20), (20), NO-IR, NO-OFDM
\t# Channel 36 - 48
\t(5170 - 5250 @ 80), (20), NO-IR, AUTO-BW
\t# Channel 52 - 64
\t(5250 - 5330 @ 80), (20), NO-IR, DFS, AUTO-BW
\t# Channel 100 - 144
\t(5490 - 5730 @ 160), (20), NO-IR, DFS
\t# Channel 149 - 165
\t(5735 - 5835 @ 80), (20), NO-IR
\t# IEEE 802.11ad (60GHz), channels 1..3
\t(57240 - 63720 @ 2160), (0)

# ETSI EN 301 893 contention parameters
wmmrule ETSI:
\tvo_c: cw_min=3, cw_max=7, aifsn=2, cot=2
\tvi_c: cw_min=7, cw_max=15, aifsn=2, cot=4
\tbe_c: cw_min=15, cw_max=1023, aifsn=3, cot=6
\tbk_c: cw_min=15, cw_max=1023, aifsn=7, cot=6

country DE: DFS-ETSI
\t# entries 279004 and 280006
\t(2400 - 2483.5 @ 40), (100 mW)
\t(5150 - 5250 @ 80), (200 mW), NO-OUTDOOR, AUTO-BW, wmmrule=ETSI
\t(5250 - 5350 @ 80), (100 mW), NO-OUTDOOR, DFS, AUTO-BW, wmmrule=ETSI
\t(5470 - 5725 @ 160), (500 mW), DFS, wmmrule=ETSI
\t# short range devices (ETSI EN 300 440-1)
\t(5725 - 5875 @ 80), (25 mW)
\t# 60 GHz band channels 1-4 (ETSI EN 302 567)
\t(57000 - 66000 @ 2160), (40)

country JP: DFS-JP
\t(2402 - 2482 @ 40), (20)
\t(2474 - 2494 @ 20), (20), NO-OFDM
\t(4910 - 4990 @ 40), (23)
\t(5030 - 5090 @ 40), (23)
\t(5170 - 5250 @ 80), (20), AUTO-BW
\t(5250 - 5330 @ 80), (20), DFS, AUTO-BW
\t(5490 - 5710 @ 160), (23), DFS
\t(59000 - 66000 @ 2160), (10)

country US: DFS-FCC
\t(2400 - 2472 @ 40), (30)
\t# 5.15 ~ 5.25 GHz: 30 dBm for master mode, 23 dBm for clients
\t(5150 - 5250 @ 80), (23), AUTO-BW
\t(5250 - 5350 @ 80), (24), DFS, AUTO-BW
\t# This range ends at 5725 MHz, but channel 144 extends to 5730 MHz.
\t# Since 5725 ~ 5730 MHz belongs to the next range which has looser
\t# requirements, we can extend the range by 5 MHz.
\t(5470 - 5730 @ 160), (24), DFS
\t(5730 - 5850 @ 80), (30), AUTO-BW
\t# 6g band
\t(5925 - 7125 @ 320), (12), NO-OUTDOOR
\t# 60g band
\t(57240 - 71000 @ 2160), (40)
";

/// Write `text` to a fresh temp dir and return both.
pub fn write_db(text: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("regulatory.db.txt");
    std::fs::write(&path, text).unwrap();
    (dir, path)
}
