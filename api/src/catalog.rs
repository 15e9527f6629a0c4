//! Survey indicator catalog: internal column keys paired with display labels.
//!
//! The catalog is a process-lifetime constant. It drives the selection widgets
//! and axis titles only; computation always works on the raw keys.

/// One named numeric survey column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub key: &'static str,
    pub label: &'static str,
    pub group: IndicatorGroup,
}

/// Sections used to organize the selection widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorGroup {
    Student,
    Home,
    School,
    Teacher,
}

impl IndicatorGroup {
    pub const ALL: [IndicatorGroup; 4] = [
        IndicatorGroup::Student,
        IndicatorGroup::Home,
        IndicatorGroup::School,
        IndicatorGroup::Teacher,
    ];

    pub fn label(self) -> &'static str {
        match self {
            IndicatorGroup::Student => "Student",
            IndicatorGroup::Home => "Home background",
            IndicatorGroup::School => "School resources",
            IndicatorGroup::Teacher => "Teacher background",
        }
    }
}

macro_rules! indicator {
    ($key:literal, $label:literal, $group:ident) => {
        Indicator {
            key: $key,
            label: $label,
            group: IndicatorGroup::$group,
        }
    };
}

/// Every indicator column of `merged_education_data`, in catalog order.
/// `SurveyRow::values` is indexed by position in this slice.
pub const INDICATORS: &[Indicator] = &[
    // Student
    indicator!("reading_score", "Reading score", Student),
    indicator!("literary_purpose", "Literary-experience purpose", Student),
    indicator!("info_purpose", "Information-acquisition purpose", Student),
    indicator!("integration_process", "Interpret & integrate", Student),
    indicator!("inference_process", "Retrieve & infer", Student),
    indicator!("reading_level", "Reading amount level", Student),
    indicator!("weekly_reading_hours", "Weekly reading hours", Student),
    indicator!("interest_reading_freq", "Reading-for-interest frequency", Student),
    indicator!("reading_time_outside", "Out-of-class reading time", Student),
    // Home background
    indicator!("home_books", "Books at home", Home),
    indicator!("children_book_count", "Children's books at home", Home),
    indicator!("study_space_count", "Home study spaces", Home),
    indicator!("guardian_a_education", "Guardian A education", Home),
    indicator!("guardian_b_education", "Guardian B education", Home),
    indicator!("child_education_expect", "Educational expectations", Home),
    // School resources
    indicator!("teaching_days_per_year", "Teaching days per year", School),
    indicator!("teaching_hours_per_week", "Teaching hours per week", School),
    indicator!("computer_count", "School computers", School),
    indicator!("class_library_books", "Class library books", School),
    // Teacher background
    indicator!("teaching_years", "Years teaching", Teacher),
    indicator!("provide_materials_freq", "Materials provided frequency", Teacher),
    indicator!("encourage_comprehension_freq", "Comprehension encouragement frequency", Teacher),
];

/// Display label for a key; unknown keys fall back to the raw key.
pub fn label(key: &str) -> &str {
    INDICATORS
        .iter()
        .find(|indicator| indicator.key == key)
        .map(|indicator| indicator.label)
        .unwrap_or(key)
}

/// Position of a key in [`INDICATORS`], which is also its slot in `SurveyRow::values`.
pub fn index_of(key: &str) -> Option<usize> {
    INDICATORS.iter().position(|indicator| indicator.key == key)
}
