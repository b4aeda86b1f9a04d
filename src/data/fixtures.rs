//! Shared launch data for unit tests

use super::LaunchTable;

/// Eleven launches across four sites.
///
/// - successes: CCAFS LC-40 = 2, VAFB SLC-4E = 0, KSC LC-39A = 2, CCAFS SLC-40 = 1
/// - payload bounds 0..9600 kg, two launches at exactly 9600 kg
/// - booster categories in order: v1.0, v1.1, FT, B4
pub(crate) const SAMPLE_CSV: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
1,CCAFS LC-40,0,0,F9 v1.0  B0003,v1.0
2,CCAFS LC-40,0,525,F9 v1.0  B0004,v1.0
3,CCAFS LC-40,1,677,F9 v1.0  B0005,v1.0
4,VAFB SLC-4E,0,500,F9 v1.1  B1003,v1.1
5,CCAFS LC-40,1,3170,F9 v1.1,v1.1
6,KSC LC-39A,1,2490,F9 FT B1031.1,FT
7,KSC LC-39A,0,5300,F9 FT B1030,FT
8,KSC LC-39A,1,9600,F9 B4 B1039.1,B4
9,CCAFS SLC-40,1,3669,F9 FT B1035.2,FT
10,VAFB SLC-4E,0,9600,F9 FT B1036.1,FT
11,CCAFS SLC-40,0,4230,F9 B4 B1041.1,B4
";

pub(crate) fn sample_table() -> LaunchTable {
    LaunchTable::from_reader(SAMPLE_CSV.as_bytes()).unwrap()
}
