/// Days from proleptic Gregorian 0000-03-01 to 1970-01-01, the shift used by the
/// civil-from-days closed forms.
pub(crate) const DAYS_0000_03_01_TO_1970: i64 = 719_468;
/// Days from proleptic Gregorian 0001-01-01 to 1970-01-01
pub const DAYS_0001_TO_1970: i64 = 719_162;
/// Days in a full 400-year Gregorian cycle
pub(crate) const DAYS_PER_GREGORIAN_CYCLE: i64 = 146_097;
/// Days in a full 4-year Julian cycle
pub(crate) const DAYS_PER_JULIAN_CYCLE: i64 = 1_461;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Days in a week
pub const DAYS_IN_WEEK: i64 = 7;
/// Value reported for week-based fields on days that belong to no week
pub const NO_WEEKDAY: i64 = 0;

/// Maximum days in each Julian/Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Julian/Gregorian proleptic year range (inclusive)
pub const JULIAN_MIN_YEAR: i32 = -999_998;
pub const JULIAN_MAX_YEAR: i32 = 999_999;

/// Epoch day of the first Gregorian day in Britain, 1752-09-14
pub const CUTOVER_EPOCH_DAY: i64 = -79_366;
/// Year in which the cutover happened
pub const CUTOVER_YEAR: i32 = 1752;
/// Month in which the cutover happened
pub const CUTOVER_MONTH: u8 = 9;
/// Number of day numbers skipped at the cutover (3rd to 13th)
pub const CUTOVER_DAYS: u8 = 11;

/// International Fixed calendar year range (inclusive)
pub const IFC_MIN_YEAR: i32 = 1;
pub const IFC_MAX_YEAR: i32 = 1_000_000;
/// International Fixed months per year
pub const IFC_MONTHS_IN_YEAR: u8 = 13;
/// Days in every regular International Fixed month
pub const IFC_DAYS_IN_MONTH: u8 = 28;
/// Month carrying the Leap Day as its 29th day
pub const IFC_LEAP_MONTH: u8 = 6;
/// Day of year of the Leap Day
pub const IFC_LEAP_DAY_OF_YEAR: u16 = 169;

/// Symmetry calendar year range (inclusive)
pub const SYMMETRY_MIN_YEAR: i32 = -1_000_000;
pub const SYMMETRY_MAX_YEAR: i32 = 1_000_000;
/// Days in a common Symmetry year (52 weeks)
pub const SYMMETRY_DAYS_IN_YEAR: u16 = 364;
/// Days in a leap Symmetry year (53 weeks)
pub const SYMMETRY_DAYS_IN_LEAP_YEAR: u16 = 371;
/// Days in each Symmetry quarter (13 weeks)
pub const SYMMETRY_DAYS_IN_QUARTER: u16 = 91;
/// Leap years per cycle
pub(crate) const SYMMETRY_LEAP_YEARS_PER_CYCLE: i64 = 52;
/// Years per cycle
pub(crate) const SYMMETRY_CYCLE_YEARS: i64 = 293;
/// Offset aligning the leap week cycle to the proleptic year numbering
pub(crate) const SYMMETRY_CYCLE_OFFSET: i64 = 146;
/// Days in one full cycle: 293 common years plus 52 leap weeks
pub(crate) const SYMMETRY_DAYS_PER_CYCLE: i64 = 293 * 364 + 52 * 7;

/// Separator used by calendars printing `year-month-day`
pub const DATE_SEPARATOR: char = '-';
/// Separator used by calendars printing `year/month/day`
pub const FIXED_SEPARATOR: char = '/';
