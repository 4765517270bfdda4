use std::sync::Arc;

use coursepick::algorithm::conflict::{conflicting_pairs, course_conflict, days_overlap, has_conflict, hours_overlap, is_conflict_free, time_conflict};
use coursepick::algorithm::{enrich_course, SelectionSet};
use coursepick::models::{CourseRecord, CourseRef, Hours};

fn course(id: &str, meets: &str) -> CourseRef {
    Arc::new(enrich_course(&CourseRecord {
        id: id.to_string(),
        title: format!("Course {}", id),
        meets: Some(meets.to_string()),
    }))
}

fn selection(courses: &[&CourseRef]) -> SelectionSet {
    courses.iter().map(|c| Arc::clone(c)).collect()
}

#[test]
fn test_disjoint_hours_no_conflict() {
    // 660-710 vs 600-650
    let a = course("F101", "MWF 11:00-11:50");
    let b = course("F110", "MWF 10:00-10:50");
    assert!(!time_conflict(&a, &b));
    assert!(!has_conflict(&a, &selection(&[&b])));
}

#[test]
fn test_disjoint_days_no_conflict() {
    let c = course("F111", "MWF 13:00-13:50");
    let d = course("F211", "TuTh 12:30-13:50");
    assert!(hours_overlap(&c.slot.unwrap().hours, &d.slot.unwrap().hours));
    assert!(!days_overlap(&c.slot.unwrap().days, &d.slot.unwrap().days));
    assert!(!has_conflict(&c, &selection(&[&d])));
}

#[test]
fn test_overlapping_courses_conflict() {
    let a = course("F100", "MWF 11:00-11:50");
    let b = course("F200", "MW 11:30-12:30");
    assert!(time_conflict(&a, &b));
    assert!(has_conflict(&a, &selection(&[&b])));
    assert!(has_conflict(&b, &selection(&[&a])));
}

#[test]
fn test_touching_intervals_do_not_overlap() {
    let h1 = Hours { start: 600, end: 650 };
    let h2 = Hours { start: 650, end: 700 };
    assert!(!hours_overlap(&h1, &h2));
    assert!(!hours_overlap(&h2, &h1));

    let a = course("F100", "MWF 10:00-10:50");
    let b = course("F200", "MWF 10:50-11:40");
    assert!(!course_conflict(&a, &b));
}

#[test]
fn test_hours_overlap_is_symmetric() {
    let samples = [
        Hours { start: 600, end: 650 },
        Hours { start: 630, end: 700 },
        Hours { start: 650, end: 660 },
        Hours { start: 0, end: 1439 },
        Hours { start: 700, end: 600 }, // invertido
        Hours { start: 640, end: 640 },
    ];
    for a in &samples {
        for b in &samples {
            assert_eq!(hours_overlap(a, b), hours_overlap(b, a), "{:?} vs {:?}", a, b);
        }
    }
}

#[test]
fn test_inverted_interval_never_overlaps() {
    let inverted = Hours { start: 700, end: 600 };
    assert!(!hours_overlap(&inverted, &Hours { start: 0, end: 1439 }));
    assert!(!hours_overlap(&inverted, &inverted));
}

#[test]
fn test_empty_selection_never_conflicts() {
    let a = course("F100", "MWF 11:00-11:50");
    assert!(!has_conflict(&a, &SelectionSet::new()));
}

#[test]
fn test_self_is_never_a_conflict() {
    let a = course("F100", "MWF 11:00-11:50");
    assert!(!has_conflict(&a, &selection(&[&a])));
}

#[test]
fn test_identical_twin_instance_conflicts() {
    // misma data, instancias distintas: no es "el mismo curso"
    let a = course("F100", "MWF 11:00-11:50");
    let twin = course("F100", "MWF 11:00-11:50");
    assert!(has_conflict(&a, &selection(&[&twin])));
}

#[test]
fn test_different_terms_never_conflict() {
    let fall = course("F100", "MWF 11:00-11:50");
    let winter = course("W100", "MWF 11:00-11:50");
    let spring = course("S100", "MWF 11:00-11:50");
    assert!(!has_conflict(&fall, &selection(&[&winter, &spring])));
    assert!(!has_conflict(&winter, &selection(&[&fall, &spring])));
}

#[test]
fn test_termless_courses_never_conflict() {
    let x = course("X100", "MWF 11:00-11:50");
    let y = course("Y100", "MWF 11:00-11:50");
    let x2 = course("X200", "MWF 11:00-11:50");
    assert!(!has_conflict(&x, &selection(&[&y, &x2])));
}

#[test]
fn test_unparseable_meets_never_conflicts() {
    let bad = course("F100", "Monday 10-11");
    assert!(bad.slot.is_none());
    let everything = course("F200", "MTuWThF 0:00-23:59");
    assert!(!has_conflict(&bad, &selection(&[&everything])));
    assert!(!has_conflict(&everything, &selection(&[&bad])));
}

#[test]
fn test_conflict_found_anywhere_in_selection() {
    let a = course("F100", "MWF 11:00-11:50");
    let b = course("F200", "TuTh 9:00-10:20");
    let c = course("F300", "F 11:45-12:30");
    let candidate = course("F400", "W 8:00-9:00");
    let sel = selection(&[&a, &b, &c]);
    assert!(!has_conflict(&candidate, &sel));
    let late = course("F500", "F 12:00-12:10");
    assert!(has_conflict(&late, &sel));
}

#[test]
fn test_retroactive_validation() {
    let a = course("F100", "MWF 11:00-11:50");
    let b = course("F200", "MW 11:30-12:30");
    let c = course("F300", "TuTh 11:00-12:00");

    let ok = selection(&[&a, &c]);
    assert!(is_conflict_free(&ok));
    assert!(conflicting_pairs(ok.as_slice()).is_empty());

    let bad = selection(&[&a, &b, &c]);
    assert!(!is_conflict_free(&bad));
    let pairs = conflicting_pairs(bad.as_slice());
    assert_eq!(pairs.len(), 1);
    assert_eq!((pairs[0].0.id.as_str(), pairs[0].1.id.as_str()), ("F100", "F200"));
}
