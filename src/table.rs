// src/table.rs
//
// Typed models → displayable/exportable tables. Pages and the CLI build
// their DataSets here so both front-ends show the same columns.

use crate::model::{
    Academy, AcademyStats, DailyReport, RankingEntry, ReputationRow, Teacher, WeeklyReport,
};
use crate::sentiment::{self, Sentiment};

#[derive(Clone, Debug, Default)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn new(headers: &[&str], rows: Vec<Vec<String>>) -> Self {
        Self {
            headers: Some(headers.iter().map(|h| s!(*h)).collect()),
            rows,
        }
    }

    pub fn row_count(&self) -> usize { self.rows.len() }

    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map(|h| h.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

fn opt(v: &Option<String>) -> String {
    v.clone().unwrap_or_else(|| s!("-"))
}

fn signed(v: i64) -> String {
    if v > 0 { format!("+{v}") } else if v < 0 { cell!(v) } else { s!() }
}

fn signed_rate(v: Option<f64>) -> String {
    match v {
        Some(r) if r >= 0.0 => format!("+{r:.1}%"),
        Some(r) => format!("{r:.1}%"),
        None => s!(),
    }
}

pub fn academies(list: &[Academy]) -> DataSet {
    let rows = list.iter().map(|a| vec![
        cell!(a.id),
        a.code.clone(),
        a.name.clone(),
        opt(&a.website),
        s!(if a.is_active { "active" } else { "inactive" }),
    ]).collect();
    DataSet::new(&["ID", "코드", "학원명", "웹사이트", "상태"], rows)
}

pub fn teachers(list: &[Teacher]) -> DataSet {
    let rows = list.iter().map(|t| vec![
        cell!(t.id),
        t.name.clone(),
        t.aliases.join(", "),
        opt(&t.academy_name),
        opt(&t.subject_name),
        t.mention_count.map(|c| cell!(c)).unwrap_or_default(),
        sentiment::percent_label(t.avg_sentiment_score),
    ]).collect();
    DataSet::new(&["ID", "강사명", "별명", "학원", "과목", "언급", "감성"], rows)
}

/// Roster table on the Academies page: per-teacher day counts.
pub fn academy_roster(list: &[Teacher]) -> DataSet {
    let rows = list.iter().map(|t| vec![
        t.name.clone(),
        opt(&t.subject_name),
        cell!(t.mention_count.unwrap_or(0)),
        cell!(t.positive_count.unwrap_or(0)),
        cell!(t.negative_count.unwrap_or(0)),
        cell!(t.recommendation_count.unwrap_or(0)),
    ]).collect();
    DataSet::new(&["강사명", "과목", "언급", "긍정", "부정", "추천"], rows)
}

pub fn teacher_ranking(list: &[RankingEntry]) -> DataSet {
    let rows = list.iter().enumerate().map(|(i, r)| vec![
        cell!(i + 1),
        r.teacher_name.clone(),
        opt(&r.academy_name),
        opt(&r.subject_name),
        cell!(r.mention_count),
        s!(Sentiment::from_score(r.avg_sentiment_score.unwrap_or(0.0)).tag()),
        cell!(r.recommendation_count),
    ]).collect();
    DataSet::new(&["순위", "강사명", "학원", "과목", "언급수", "감성", "추천"], rows)
}

pub fn academy_stats(list: &[AcademyStats]) -> DataSet {
    let rows = list.iter().map(|a| vec![
        a.academy_name.clone(),
        cell!(a.total_mentions),
        cell!(a.total_teachers_mentioned),
        sentiment::percent_label(a.avg_sentiment_score),
        opt(&a.top_teacher_name),
    ]).collect();
    DataSet::new(&["학원", "총 언급", "강사 수", "평균 감성", "TOP 강사"], rows)
}

pub fn daily_reports(list: &[DailyReport]) -> DataSet {
    let rows = list.iter().map(|r| vec![
        r.teacher_name.clone(),
        opt(&r.academy_name),
        cell!(r.mention_count),
        cell!(r.positive_count),
        cell!(r.negative_count),
        cell!(r.neutral_count),
        sentiment::percent_label(r.avg_sentiment_score),
        cell!(r.recommendation_count),
        signed(r.mention_change),
        r.top_keywords.iter().take(3).cloned().collect::<Vec<_>>().join(", "),
    ]).collect();
    DataSet::new(
        &["강사명", "학원", "총 언급", "긍정", "부정", "중립", "평균 감성", "추천", "전일 대비", "키워드"],
        rows,
    )
}

/// Per-day history table on the teacher detail view.
pub fn report_history(list: &[DailyReport]) -> DataSet {
    let rows = list.iter().map(|r| vec![
        r.report_date.map(|d| d.to_string()).unwrap_or_else(|| s!("-")),
        cell!(r.mention_count),
        cell!(r.positive_count),
        cell!(r.negative_count),
        cell!(r.recommendation_count),
        signed(r.mention_change),
    ]).collect();
    DataSet::new(&["날짜", "언급", "긍정", "부정", "추천", "변화"], rows)
}

pub fn weekly_ranking(list: &[WeeklyReport]) -> DataSet {
    let rows = list.iter().enumerate().map(|(i, r)| vec![
        cell!(r.weekly_rank.unwrap_or(i as u32 + 1)),
        r.teacher_name.clone(),
        opt(&r.academy_name),
        cell!(r.mention_count),
        cell!(r.positive_count),
        cell!(r.negative_count),
        sentiment::percent_label(r.avg_sentiment_score),
        cell!(r.recommendation_count),
        signed_rate(r.mention_change_rate),
        r.top_keywords.iter().take(3).cloned().collect::<Vec<_>>().join(", "),
    ]).collect();
    DataSet::new(
        &["순위", "강사명", "학원", "총 언급", "긍정", "부정", "감성", "추천", "전주 대비", "키워드"],
        rows,
    )
}

pub fn reputation(list: &[ReputationRow]) -> DataSet {
    let rows = list.iter().map(|r| vec![
        cell!(r.id),
        r.keyword.clone(),
        opt(&r.site_name),
        r.title.clone(),
        r.sentiment.clone(),
        r.score.map(|v| format!("{v:.2}")).unwrap_or_else(|| s!("-")),
        opt(&r.created_at),
    ]).collect();
    DataSet::new(&["ID", "Keyword", "Site", "Title", "Sentiment", "Score", "Date"], rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RankingEntry;

    #[test]
    fn ranking_rows_are_one_based_and_bucketed() {
        let list = vec![
            RankingEntry {
                teacher_name: s!("A"),
                mention_count: 9,
                avg_sentiment_score: Some(0.5),
                ..RankingEntry::default()
            },
            RankingEntry { teacher_name: s!("B"), ..RankingEntry::default() },
        ];
        let ds = teacher_ranking(&list);
        assert_eq!(ds.header_count(), 7);
        assert_eq!(ds.rows[0][0], "1");
        assert_eq!(ds.rows[0][5], "POSITIVE");
        assert_eq!(ds.rows[1][0], "2");
        assert_eq!(ds.rows[1][5], "NEUTRAL");
    }

    #[test]
    fn signed_change_formatting() {
        assert_eq!(signed(3), "+3");
        assert_eq!(signed(-2), "-2");
        assert_eq!(signed(0), "");
        assert_eq!(signed_rate(Some(12.34)), "+12.3%");
        assert_eq!(signed_rate(Some(-5.0)), "-5.0%");
        assert_eq!(signed_rate(None), "");
    }
}
