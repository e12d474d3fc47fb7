//! # Wi-Fi Channel Catalog
//!
//! The standard IEEE 802.11 channel plan for the 2.4, 5, 6 and 60 GHz
//! bands, including the bonded 40/80/160 MHz and 60 GHz aggregate
//! channels. Queries accept any channel list; this catalog is the default
//! one.
//!
//! Entries are ordered by lower edge, then upper edge, then channel number.

use crate::channel::{Band, Channel};

use Band::*;

#[rustfmt::skip]
const WIFI_CHANNELS: &[(u32, f64, f64, Band)] = &[
    (1, 2402.0, 2422.0, Band2g4),
    (2, 2407.0, 2427.0, Band2g4),
    (3, 2412.0, 2432.0, Band2g4),
    (4, 2417.0, 2437.0, Band2g4),
    (5, 2422.0, 2442.0, Band2g4),
    (6, 2427.0, 2447.0, Band2g4),
    (7, 2432.0, 2452.0, Band2g4),
    (8, 2437.0, 2457.0, Band2g4),
    (9, 2442.0, 2462.0, Band2g4),
    (10, 2447.0, 2467.0, Band2g4),
    (11, 2452.0, 2472.0, Band2g4),
    (12, 2457.0, 2477.0, Band2g4),
    (13, 2462.0, 2482.0, Band2g4),
    (14, 2474.0, 2494.0, Band2g4Jp),
    (7, 5030.0, 5040.0, Band5g0),
    (8, 5030.0, 5050.0, Band5g0),
    (9, 5040.0, 5050.0, Band5g0),
    (11, 5050.0, 5060.0, Band5g0),
    (12, 5050.0, 5070.0, Band5g0),
    (16, 5070.0, 5090.0, Band5g0),
    (32, 5150.0, 5170.0, Band5g2),
    (34, 5150.0, 5190.0, Band5g2),
    (36, 5170.0, 5190.0, Band5g2),
    (38, 5170.0, 5210.0, Band5g2),
    (42, 5170.0, 5250.0, Band5g2),
    (50, 5170.0, 5330.0, Band5g2),
    (40, 5190.0, 5210.0, Band5g2),
    (44, 5210.0, 5230.0, Band5g2),
    (46, 5210.0, 5250.0, Band5g2),
    (48, 5230.0, 5250.0, Band5g2),
    (52, 5250.0, 5270.0, Band5g2),
    (54, 5250.0, 5290.0, Band5g2),
    (58, 5250.0, 5330.0, Band5g2),
    (56, 5270.0, 5290.0, Band5g2),
    (60, 5290.0, 5310.0, Band5g2),
    (62, 5290.0, 5330.0, Band5g2),
    (64, 5310.0, 5330.0, Band5g2),
    (68, 5330.0, 5350.0, Band5g2),
    (96, 5470.0, 5490.0, Band5g5),
    (100, 5490.0, 5510.0, Band5g5),
    (102, 5490.0, 5530.0, Band5g5),
    (106, 5490.0, 5570.0, Band5g5),
    (114, 5490.0, 5650.0, Band5g5),
    (104, 5510.0, 5530.0, Band5g5),
    (108, 5530.0, 5550.0, Band5g5),
    (110, 5530.0, 5570.0, Band5g5),
    (112, 5550.0, 5570.0, Band5g5),
    (116, 5570.0, 5590.0, Band5g5),
    (118, 5570.0, 5610.0, Band5g5),
    (122, 5570.0, 5650.0, Band5g5),
    (120, 5590.0, 5610.0, Band5g5),
    (124, 5610.0, 5630.0, Band5g5),
    (126, 5610.0, 5650.0, Band5g5),
    (128, 5630.0, 5650.0, Band5g5),
    (132, 5650.0, 5670.0, Band5g7),
    (134, 5650.0, 5690.0, Band5g7),
    (138, 5650.0, 5730.0, Band5g7),
    (136, 5670.0, 5690.0, Band5g7),
    (140, 5690.0, 5710.0, Band5g7),
    (142, 5690.0, 5730.0, Band5g7),
    (144, 5710.0, 5730.0, Band5g7),
    (149, 5735.0, 5755.0, Band5g8),
    (151, 5735.0, 5775.0, Band5g8),
    (155, 5735.0, 5815.0, Band5g8),
    (153, 5755.0, 5775.0, Band5g8),
    (157, 5775.0, 5795.0, Band5g8),
    (159, 5775.0, 5815.0, Band5g8),
    (161, 5795.0, 5815.0, Band5g8),
    (165, 5815.0, 5835.0, Band5g8),
    (169, 5835.0, 5855.0, Band5g8),
    (173, 5855.0, 5875.0, Band5g8),
    (182, 5905.0, 5915.0, Band5g9),
    (183, 5905.0, 5925.0, Band5g9),
    (184, 5915.0, 5925.0, Band5g9),
    (187, 5930.0, 5940.0, Band5g9),
    (188, 5930.0, 5950.0, Band5g9),
    (189, 5940.0, 5950.0, Band5g9),
    (1, 5945.0, 5965.0, Band6gLower),
    (192, 5950.0, 5970.0, Band5g9),
    (5, 5965.0, 5985.0, Band6gLower),
    (196, 5970.0, 5990.0, Band5g9),
    (9, 5985.0, 6005.0, Band6gLower),
    (13, 6005.0, 6025.0, Band6gLower),
    (17, 6025.0, 6045.0, Band6gLower),
    (21, 6045.0, 6065.0, Band6gLower),
    (25, 6065.0, 6085.0, Band6gLower),
    (29, 6085.0, 6105.0, Band6gLower),
    (33, 6105.0, 6125.0, Band6gLower),
    (37, 6125.0, 6145.0, Band6gLower),
    (41, 6145.0, 6165.0, Band6gLower),
    (45, 6165.0, 6185.0, Band6gLower),
    (49, 6185.0, 6205.0, Band6gLower),
    (53, 6205.0, 6225.0, Band6gLower),
    (57, 6225.0, 6245.0, Band6gLower),
    (61, 6245.0, 6265.0, Band6gLower),
    (65, 6265.0, 6285.0, Band6gLower),
    (69, 6285.0, 6305.0, Band6gLower),
    (73, 6305.0, 6325.0, Band6gLower),
    (77, 6325.0, 6345.0, Band6gLower),
    (81, 6345.0, 6365.0, Band6gLower),
    (85, 6365.0, 6385.0, Band6gLower),
    (89, 6385.0, 6405.0, Band6gLower),
    (93, 6405.0, 6425.0, Band6gLower),
    (97, 6425.0, 6445.0, Band6gUpper),
    (101, 6445.0, 6465.0, Band6gUpper),
    (105, 6465.0, 6485.0, Band6gUpper),
    (109, 6485.0, 6505.0, Band6gUpper),
    (113, 6505.0, 6525.0, Band6gUpper),
    (117, 6525.0, 6545.0, Band6gUpper),
    (121, 6545.0, 6565.0, Band6gUpper),
    (125, 6565.0, 6585.0, Band6gUpper),
    (129, 6585.0, 6605.0, Band6gUpper),
    (133, 6605.0, 6625.0, Band6gUpper),
    (137, 6625.0, 6645.0, Band6gUpper),
    (141, 6645.0, 6665.0, Band6gUpper),
    (145, 6665.0, 6685.0, Band6gUpper),
    (149, 6685.0, 6705.0, Band6gUpper),
    (153, 6705.0, 6725.0, Band6gUpper),
    (157, 6725.0, 6745.0, Band6gUpper),
    (161, 6745.0, 6765.0, Band6gUpper),
    (165, 6765.0, 6785.0, Band6gUpper),
    (169, 6785.0, 6805.0, Band6gUpper),
    (173, 6805.0, 6825.0, Band6gUpper),
    (177, 6825.0, 6845.0, Band6gUpper),
    (181, 6845.0, 6865.0, Band6gUpper),
    (185, 6865.0, 6885.0, Band6gUpper),
    (189, 6885.0, 6905.0, Band6gUpper),
    (193, 6905.0, 6925.0, Band6gUpper),
    (197, 6925.0, 6945.0, Band6gUpper),
    (201, 6945.0, 6965.0, Band6gUpper),
    (205, 6965.0, 6985.0, Band6gUpper),
    (209, 6985.0, 7005.0, Band6gUpper),
    (213, 7005.0, 7025.0, Band6gUpper),
    (217, 7025.0, 7045.0, Band6gUpper),
    (221, 7045.0, 7065.0, Band6gUpper),
    (225, 7065.0, 7085.0, Band6gUpper),
    (229, 7085.0, 7105.0, Band6gUpper),
    (233, 7105.0, 7125.0, Band6gUpper),
    (1, 57240.0, 59400.0, Band60gWellKnown),
    (9, 57240.0, 61560.0, Band60gOther),
    (17, 57240.0, 63720.0, Band60gOther),
    (25, 57240.0, 65880.0, Band60gOther),
    (2, 59400.0, 61560.0, Band60gWellKnown),
    (10, 59400.0, 63720.0, Band60gOther),
    (18, 59400.0, 65880.0, Band60gOther),
    (26, 59400.0, 68040.0, Band60gOther),
    (3, 61560.0, 63720.0, Band60gWellKnown),
    (11, 61560.0, 65880.0, Band60gOther),
    (19, 61560.0, 68040.0, Band60gOther),
    (27, 61560.0, 70200.0, Band60gOther),
    (4, 63720.0, 65880.0, Band60gWellKnown),
    (12, 63720.0, 68040.0, Band60gOther),
    (20, 63720.0, 70020.0, Band60gOther),
    (5, 65880.0, 68040.0, Band60gOther),
    (13, 65880.0, 70200.0, Band60gOther),
    (6, 68040.0, 70200.0, Band60gOther),
];

/// Every channel in the catalog.
pub fn wifi_channels() -> Vec<Channel> {
    WIFI_CHANNELS
        .iter()
        .map(|&(id, start, end, band)| Channel::new(id, start, end, band))
        .collect()
}

/// Catalog channels whose band is in `bands`, in catalog order.
pub fn channels_in_bands(bands: &[Band]) -> Vec<Channel> {
    WIFI_CHANNELS
        .iter()
        .filter(|(_, _, _, band)| bands.contains(band))
        .map(|&(id, start, end, band)| Channel::new(id, start, end, band))
        .collect()
}

/// Catalog channels numbered `id`, optionally restricted to one band.
pub fn find_channels(id: u32, band: Option<Band>) -> Vec<Channel> {
    wifi_channels()
        .into_iter()
        .filter(|ch| ch.id == id && band.map_or(true, |b| ch.band == b))
        .collect()
}
