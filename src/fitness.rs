//! Timetable fitness evaluation.
//!
//! Scores a timetable against hard constraints and break placement.
//!
//! # Scoring
//!
//! Evaluation starts from [`BASE_SCORE`]. A break outside the accepted
//! positions costs [`MISPLACED_BREAK_PENALTY`] (soft). Any hard violation
//! forces the score to 0; the issue list still carries every message.
//!
//! Hard constraints, checked per batch and day:
//! - a subject appears at most once
//! - no two lessons share a faculty or a classroom
//! - exactly one break
//!
//! Batches are evaluated independently. Conflicts between batches are only
//! checked when [`ConstraintPolicy::cross_batch_conflicts`] is set.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::config::ConstraintPolicy;
use crate::models::{BatchId, EntitySnapshot, FacultyId, Lesson, Timetable, Weekday};

/// Score of a timetable with no issues.
pub const BASE_SCORE: i32 = 100;

/// Deduction per break outside the accepted positions.
pub const MISPLACED_BREAK_PENALTY: i32 = 5;

/// Whether an issue invalidates the timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Soft,
    Hard,
}

/// Classification of timetable issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueKind {
    /// Break outside the accepted positions.
    MisplacedBreak,
    /// Same subject twice in one batch-day.
    RepeatedSubject,
    /// Two lessons of one batch-day share a faculty or classroom.
    Clash,
    /// A batch-day without exactly one break.
    BreakCount,
    /// Two batches share a faculty or classroom in the same period.
    CrossBatchClash,
    /// A faculty exceeds its daily class limit.
    FacultyOverload,
}

/// One finding reported by the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub severity: Severity,
    /// Batch concerned, if the issue belongs to one batch.
    pub batch_id: Option<BatchId>,
    pub day: Weekday,
    /// Zero-based period, if the issue concerns one period.
    pub period: Option<usize>,
    /// Human-readable description.
    pub message: String,
}

/// Result of evaluating a timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fitness {
    /// 0 if any hard violation occurred, otherwise `BASE_SCORE` minus soft penalties.
    pub score: i32,
    /// Every issue found, in scan order.
    pub issues: Vec<Issue>,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Issue {
    fn hard(
        kind: IssueKind,
        batch_id: Option<BatchId>,
        day: Weekday,
        period: Option<usize>,
        message: String,
    ) -> Self {
        Self {
            kind,
            severity: Severity::Hard,
            batch_id,
            day,
            period,
            message,
        }
    }

    #[inline]
    pub fn is_hard(&self) -> bool {
        self.severity == Severity::Hard
    }
}

impl Fitness {
    /// Whether no hard violation was found.
    pub fn is_feasible(&self) -> bool {
        !self.issues.iter().any(Issue::is_hard)
    }

    /// Issue messages in scan order.
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(|i| i.message.clone()).collect()
    }

    /// Number of hard violations.
    pub fn hard_count(&self) -> usize {
        self.issues.iter().filter(|i| i.is_hard()).count()
    }
}

/// Scores timetables against one entity snapshot.
///
/// Evaluation is a pure read of the timetable and the snapshot.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator<'a> {
    snapshot: &'a EntitySnapshot,
    break_positions: Vec<usize>,
    policy: ConstraintPolicy,
}

impl<'a> FitnessEvaluator<'a> {
    /// Creates an evaluator accepting breaks at `break_positions`.
    pub fn new(snapshot: &'a EntitySnapshot, break_positions: Vec<usize>) -> Self {
        Self {
            snapshot,
            break_positions,
            policy: ConstraintPolicy::default(),
        }
    }

    /// Sets the constraint policy.
    pub fn with_policy(mut self, policy: ConstraintPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Computes score and issues.
    pub fn evaluate(&self, timetable: &Timetable) -> Fitness {
        let mut score = BASE_SCORE;
        let mut issues = Vec::new();

        for plan in &timetable.batches {
            let batch_name = self.snapshot.batch_name(plan.batch_id);
            let batch = Some(plan.batch_id);

            for day_plan in &plan.days {
                let day = day_plan.day;
                let slots = &day_plan.slots;
                let mut subjects_seen = HashSet::new();
                let mut break_count = 0;

                for (i, slot) in slots.iter().enumerate() {
                    let Some(lesson) = &slot.lesson else {
                        break_count += 1;
                        if !self.break_positions.contains(&i) {
                            score -= MISPLACED_BREAK_PENALTY;
                            issues.push(Issue {
                                kind: IssueKind::MisplacedBreak,
                                severity: Severity::Soft,
                                batch_id: batch,
                                day,
                                period: Some(i),
                                message: format!("Break in wrong slot for {batch_name} on {day}"),
                            });
                        }
                        continue;
                    };

                    if !subjects_seen.insert(lesson.subject_id) {
                        issues.push(Issue::hard(
                            IssueKind::RepeatedSubject,
                            batch,
                            day,
                            Some(i),
                            format!(
                                "{batch_name}: Subject {} repeats on {day}",
                                self.snapshot.subject_name(lesson.subject_id)
                            ),
                        ));
                    }

                    // One message per clashing partner, so a clash is reported from both sides.
                    for (j, other) in day_plan.lessons() {
                        if j == i {
                            continue;
                        }
                        if lesson.faculty_id == other.faculty_id
                            || lesson.classroom_id == other.classroom_id
                        {
                            issues.push(Issue::hard(
                                IssueKind::Clash,
                                batch,
                                day,
                                Some(i),
                                format!("{batch_name}: Clash at {day} slot {}", i + 1),
                            ));
                        }
                    }
                }

                if break_count != 1 {
                    issues.push(Issue::hard(
                        IssueKind::BreakCount,
                        batch,
                        day,
                        None,
                        format!("{batch_name}: {day} has {break_count} breaks instead of 1"),
                    ));
                }
            }
        }

        if self.policy.cross_batch_conflicts {
            self.check_cross_batch(timetable, &mut issues);
        }
        if self.policy.faculty_daily_limit {
            self.check_faculty_load(timetable, &mut issues);
        }

        if issues.iter().any(Issue::is_hard) {
            score = 0;
        }
        Fitness { score, issues }
    }

    /// Score only.
    #[inline]
    pub fn score(&self, timetable: &Timetable) -> i32 {
        self.evaluate(timetable).score
    }

    fn check_cross_batch(&self, timetable: &Timetable, issues: &mut Vec<Issue>) {
        let mut by_period: BTreeMap<(Weekday, usize), Vec<(BatchId, &Lesson)>> = BTreeMap::new();
        for plan in &timetable.batches {
            for day_plan in &plan.days {
                for (period, lesson) in day_plan.lessons() {
                    by_period
                        .entry((day_plan.day, period))
                        .or_default()
                        .push((plan.batch_id, lesson));
                }
            }
        }

        for ((day, period), lessons) in &by_period {
            for (a, (batch_a, lesson_a)) in lessons.iter().enumerate() {
                for (batch_b, lesson_b) in &lessons[a + 1..] {
                    if batch_a == batch_b {
                        continue;
                    }
                    let shared = if lesson_a.faculty_id == lesson_b.faculty_id {
                        "Faculty"
                    } else if lesson_a.classroom_id == lesson_b.classroom_id {
                        "Classroom"
                    } else {
                        continue;
                    };
                    issues.push(Issue::hard(
                        IssueKind::CrossBatchClash,
                        Some(*batch_a),
                        *day,
                        Some(*period),
                        format!(
                            "{} and {}: {shared} clash at {day} slot {}",
                            self.snapshot.batch_name(*batch_a),
                            self.snapshot.batch_name(*batch_b),
                            period + 1
                        ),
                    ));
                }
            }
        }
    }

    fn check_faculty_load(&self, timetable: &Timetable, issues: &mut Vec<Issue>) {
        let mut load: BTreeMap<(Weekday, FacultyId), u32> = BTreeMap::new();
        for plan in &timetable.batches {
            for day_plan in &plan.days {
                for (_, lesson) in day_plan.lessons() {
                    *load.entry((day_plan.day, lesson.faculty_id)).or_insert(0) += 1;
                }
            }
        }

        for ((day, faculty_id), count) in load {
            let Some(faculty) = self.snapshot.faculty(faculty_id) else {
                continue;
            };
            if count > faculty.max_classes_per_day {
                issues.push(Issue::hard(
                    IssueKind::FacultyOverload,
                    None,
                    day,
                    None,
                    format!(
                        "Faculty {} teaches {count} classes on {day} (max {})",
                        faculty.name, faculty.max_classes_per_day
                    ),
                ));
            }
        }
    }
}
