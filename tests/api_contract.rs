// tests/api_contract.rs
//
// Wire-format checks: the client must decode the camelCase payloads the
// V2 backend actually serves, and surface its JSON error bodies.

mod common;

use teacherhub::api::{self, ApiClient, ApiError};

static ROUTES: &[(&str, &str)] = &[
    (
        "/api/v2/academies",
        r#"[{"id":1,"code":"daesung","name":"대성학원","website":"https://daesung.example","isActive":true,"createdAt":"2025-01-02T10:00:00"},
            {"id":2,"code":"jongro","name":"종로학원","isActive":false}]"#,
    ),
    (
        "/api/v2/teachers",
        r#"[{"id":11,"name":"김수학","aliases":["김수","수학왕"],"academyId":1,"academyName":"대성학원","subjectId":3,"subjectName":"수학","isActive":true,"mentionCount":42,"positiveCount":30,"negativeCount":4,"recommendationCount":12,"avgSentimentScore":0.61}]"#,
    ),
    (
        "/api/v2/teachers/11",
        r#"{"id":11,"name":"김수학","aliases":["김수"],"academyName":"대성학원","isActive":true}"#,
    ),
    (
        "/api/v2/teachers/11/mentions",
        r#"[{"id":901,"teacherId":11,"sentiment":"POSITIVE","context":"설명이 진짜 좋음","mentionType":"comment","isRecommended":true,"createdAt":"2026-08-29T21:00:00"}]"#,
    ),
    (
        "/api/v2/analysis/summary",
        r#"{"totalMentions":310,"totalTeachers":48,"totalAcademies":6,"totalPositive":180,"totalNegative":40,"totalRecommendations":55,"positiveRatio":0.58,"mentionChange":12.5}"#,
    ),
    (
        "/api/v2/analysis/ranking",
        r#"[{"teacherId":11,"teacherName":"김수학","academyName":"대성학원","subjectName":"수학","mentionCount":42,"avgSentimentScore":0.61,"recommendationCount":12}]"#,
    ),
    (
        "/api/v2/analysis/teachers/11/reports",
        r#"[{"id":5,"teacherId":11,"teacherName":"김수학","reportDate":"2026-08-28","mentionCount":26,"positiveCount":18,"negativeCount":2,"neutralCount":6,"recommendationCount":7,"mentionChange":1}]"#,
    ),
    (
        "/api/v2/reports/daily",
        r#"{"periodType":"daily","startDate":"2026-08-29","endDate":"2026-08-29","totalTeachers":2,"totalMentions":50,
            "teacherSummaries":[{"id":5,"teacherId":11,"teacherName":"김수학","academyName":"대성학원","reportDate":"2026-08-29","mentionCount":30,"positiveCount":20,"negativeCount":3,"neutralCount":7,"avgSentimentScore":0.55,"recommendationCount":8,"mentionChange":4,"topKeywords":["개념","설명"],"difficultyEasyCount":5,"difficultyMediumCount":2,"difficultyHardCount":1,"summary":"호평 위주"}]}"#,
    ),
    (
        "/api/v2/reports/periods",
        r#"{"current":"2026-08-29","daily":[{"date":"2026-08-29","label":"8월 29일"}],"weekly":[{"year":2026,"week":35,"label":"2026년 35주차"}],"monthly":[{"year":2026,"month":8,"label":"2026년 8월"}]}"#,
    ),
    (
        "/api/v2/weekly/current",
        r#"{"year":2026,"week":35,"weekLabel":"2026년 35주차","startDate":"2026-08-24","endDate":"2026-08-30"}"#,
    ),
    (
        "/api/v2/weekly/ranking",
        r#"[{"id":7,"teacherId":11,"teacherName":"김수학","academyName":"대성학원","year":2026,"weekNumber":35,"mentionCount":120,"positiveCount":80,"negativeCount":10,"neutralCount":30,"recommendationCount":25,"avgSentimentScore":0.58,"mentionChangeRate":33.3,"weeklyRank":1,"topKeywords":["개념"]}]"#,
    ),
    (
        "/api/v2/crawl/status",
        r#"{"status":"RUNNING","startedAt":"2026-08-30T01:00:00","postsCollected":240,"commentsCollected":1800,"mentionsFound":95}"#,
    ),
    ("/api/v2/crawl/trigger", r#"{}"#),
    (
        "/api/v2/crawl/logs",
        r#"[{"status":"COMPLETED","startedAt":"2026-08-29T01:00:00","finishedAt":"2026-08-29T01:20:00","postsCollected":500,"commentsCollected":3000,"mentionsFound":210},
            {"status":"FAILED","errorMessage":"timeout"}]"#,
    ),
    (
        "/api/v2/teachers/search",
        r#"[{"id":11,"name":"김수학","aliases":["김수"],"isActive":true}]"#,
    ),
    (
        "/api/v2/teachers/11/reports",
        r#"[{"id":5,"teacherId":11,"teacherName":"김수학","reportDate":"2026-08-29","mentionCount":30,"positiveCount":20,"negativeCount":3,"neutralCount":7,"recommendationCount":8,"mentionChange":-2}]"#,
    ),
    (
        "/api/v2/mentions/recent",
        r#"[{"id":902,"teacherId":11,"sentiment":"NEGATIVE","context":"숙제가 너무 많음","isRecommended":false}]"#,
    ),
    (
        "/api/v2/mentions",
        r#"[{"id":900,"teacherId":11,"sentiment":"NEUTRAL","mentionType":"post"}]"#,
    ),
    (
        "/api/v2/academies/1",
        r#"{"id":1,"code":"daesung","name":"대성학원","isActive":true}"#,
    ),
    (
        "/api/v2/academies/1/stats",
        r#"{"academyId":1,"academyName":"대성학원","totalMentions":140,"totalTeachersMentioned":9,"avgSentimentScore":0.44,"topTeacherName":"김수학"}"#,
    ),
    (
        "/api/v2/academies/1/teachers",
        r#"[{"id":11,"name":"김수학","aliases":[],"academyId":1,"isActive":true,"mentionCount":42,"positiveCount":30,"negativeCount":4,"recommendationCount":12}]"#,
    ),
    (
        "/api/v2/weekly/report",
        r#"[{"id":7,"teacherId":11,"teacherName":"김수학","year":2026,"weekNumber":35,"mentionCount":120,"positiveCount":80,"negativeCount":10,"neutralCount":30,"recommendationCount":25}]"#,
    ),
    (
        "/api/v2/weekly/academy/1",
        r#"{"year":2026,"weekNumber":35,"totalMentions":300,"totalPositive":180,"totalNegative":40,"totalTeachers":9,"totalRecommendations":50,"mentionChangeRate":10.0}"#,
    ),
    (
        "/api/v2/weekly/academy/1/trend",
        r#"[{"year":2026,"weekNumber":35,"mentionCount":300,"positiveCount":180,"negativeCount":40,"recommendationCount":50,"avgSentimentScore":0.46}]"#,
    ),
    (
        "/api/v2/weekly/summary",
        r#"{"year":2026,"weekNumber":35,"totalMentions":800,"totalPositive":500,"totalNegative":90,"totalTeachers":40,"totalRecommendations":120,"mentionChangeRate":-4.2}"#,
    ),
    (
        "/api/v2/weekly/teacher/11",
        r#"{"id":7,"teacherId":11,"teacherName":"김수학","year":2026,"weekNumber":35,"mentionCount":120,"weeklyRank":1}"#,
    ),
    (
        "/api/v2/weekly/teacher/11/trend",
        r#"[{"year":2026,"weekNumber":34,"weekLabel":"34주차","mentionCount":90,"positiveCount":60,"negativeCount":8,"recommendationCount":20,"avgSentimentScore":0.5},
            {"year":2026,"weekNumber":35,"mentionCount":120,"positiveCount":80,"negativeCount":10,"recommendationCount":25,"avgSentimentScore":0.58}]"#,
    ),
    (
        "/api/v2/reports/weekly",
        r#"{"periodType":"weekly","startDate":"2026-08-24","endDate":"2026-08-30","totalTeachers":40,"totalMentions":800,"teacherSummaries":[]}"#,
    ),
    (
        "/api/v2/reports/monthly",
        r#"{"periodType":"monthly","startDate":"2026-08-01","endDate":"2026-08-31","totalTeachers":52,"totalMentions":3500,"teacherSummaries":[]}"#,
    ),
    ("/api/v2/academies/9/stats", r#"<html>gateway error</html>"#),
    (
        "/api/reputation",
        r#"[{"id":1,"keyword":"대성학원","siteName":"dcinside","title":"수학 김수학 어떰?","url":"https://g.example/1","sentiment":"positive","score":0.7,"createdAt":"2026-08-29"}]"#,
    ),
    (
        "/api/reputation/stats",
        r#"{"keyword":"대성학원","totalPosts":230,"totalComments":1900,"monthlyStats":[{"month":"2026-07","postCount":100},{"month":"2026-08","postCount":130}]}"#,
    ),
];

fn client() -> (common::StubServer, ApiClient) {
    let server = common::start(ROUTES);
    let api = ApiClient::new(&server.base_url).unwrap();
    (server, api)
}

#[test]
fn academies_decode_with_optional_fields() {
    let (_s, api) = client();
    let list = api::academies::all(&api).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].code, "daesung");
    assert_eq!(list[0].website.as_deref(), Some("https://daesung.example"));
    assert!(list[0].is_active);
    assert!(list[1].website.is_none());
    assert!(!list[1].is_active);
}

#[test]
fn teachers_carry_aliases_and_stat_fields() {
    let (_s, api) = client();
    let list = api::teachers::all(&api, None).unwrap();
    let t = &list[0];
    assert_eq!(t.aliases, vec!["김수", "수학왕"]);
    assert_eq!(t.academy_name.as_deref(), Some("대성학원"));
    assert_eq!(t.mention_count, Some(42));
    assert_eq!(t.avg_sentiment_score, Some(0.61));

    // detail payload omits the stat fields entirely
    let one = api::teachers::by_id(&api, 11).unwrap();
    assert_eq!(one.name, "김수학");
    assert!(one.mention_count.is_none());
}

#[test]
fn analysis_summary_and_ranking_decode() {
    let (_s, api) = client();
    let summary = api::analysis::summary(&api, None).unwrap();
    assert_eq!(summary.total_mentions, 310);
    assert_eq!(summary.positive_ratio, 0.58);
    assert_eq!(summary.mention_change, 12.5);

    let ranking = api::analysis::ranking(&api, None, 20).unwrap();
    assert_eq!(ranking[0].teacher_name, "김수학");
    assert_eq!(ranking[0].mention_count, 42);

    let history = api::analysis::teacher_reports(&api, 11, 7).unwrap();
    assert_eq!(history[0].report_date, Some("2026-08-28".parse().unwrap()));
}

#[test]
fn daily_report_nests_teacher_summaries() {
    let (_s, api) = client();
    let date = "2026-08-29".parse().unwrap();
    let report = api::reports::daily(&api, date).unwrap();
    assert_eq!(report.period_type, "daily");
    assert_eq!(report.teacher_summaries.len(), 1);

    let r = &report.teacher_summaries[0];
    assert_eq!(r.report_date, Some(date));
    assert_eq!(r.mention_change, 4);
    assert_eq!(r.top_keywords, vec!["개념", "설명"]);
    assert_eq!(r.difficulty_easy_count, 5);
    assert_eq!(r.summary.as_deref(), Some("호평 위주"));
}

#[test]
fn period_lists_have_all_four_groups() {
    let (_s, api) = client();
    let periods = api::reports::periods(&api).unwrap();
    assert_eq!(periods.current.as_deref(), Some("2026-08-29"));
    assert_eq!(periods.daily[0].date.as_deref(), Some("2026-08-29"));
    assert_eq!(periods.weekly[0].week, Some(35));
    assert_eq!(periods.monthly[0].month, Some(8));
}

#[test]
fn weekly_current_and_ranking_decode() {
    let (_s, api) = client();
    let info = api::weekly::current(&api).unwrap();
    assert_eq!(info.year, 2026);
    assert_eq!(info.week, 35);

    let ranking = api::weekly::ranking(&api, 2026, 35, 30).unwrap();
    let top = &ranking[0];
    assert_eq!(top.weekly_rank, Some(1));
    assert_eq!(top.week_number, 35);
    assert_eq!(top.mention_change_rate, Some(33.3));
}

#[test]
fn mentions_decode_recommendation_flag() {
    let (_s, api) = client();
    let mentions = api::teachers::mentions(&api, 11, 10).unwrap();
    assert!(mentions[0].is_recommended);
    assert_eq!(mentions[0].sentiment, "POSITIVE");
}

#[test]
fn crawl_status_running_and_trigger() {
    let (_s, api) = client();
    let status = api::crawl::status(&api).unwrap();
    assert!(status.is_running());
    assert_eq!(status.mentions_found, 95);

    api::crawl::trigger(&api).unwrap();
}

#[test]
fn teacher_search_and_report_history_decode() {
    let (_s, api) = client();
    let hits = api::teachers::search(&api, "김수").unwrap();
    assert_eq!(hits[0].id, 11);

    let history = api::teachers::reports(&api, 11, 7).unwrap();
    assert_eq!(history[0].mention_change, -2);
    assert_eq!(history[0].report_date, Some("2026-08-29".parse().unwrap()));
}

#[test]
fn recent_mentions_decode() {
    let (_s, api) = client();
    let mentions = api::mentions::recent(&api, 10).unwrap();
    assert_eq!(mentions[0].sentiment, "NEGATIVE");
    assert!(!mentions[0].is_recommended);

    let by_day = api::mentions::by_date(&api, "2026-08-29".parse().unwrap()).unwrap();
    assert_eq!(by_day[0].mention_type.as_deref(), Some("post"));
}

#[test]
fn academy_detail_endpoints_decode() {
    let (_s, api) = client();
    let one = api::academies::by_id(&api, 1).unwrap();
    assert_eq!(one.code, "daesung");

    let stats = api::academies::stats(&api, 1, None).unwrap();
    assert_eq!(stats.total_mentions, 140);
    assert_eq!(stats.top_teacher_name.as_deref(), Some("김수학"));

    let roster = api::academies::teachers(&api, 1).unwrap();
    assert_eq!(roster[0].academy_id, Some(1));
    assert_eq!(roster[0].positive_count, Some(30));
}

#[test]
fn weekly_summary_teacher_and_trend_decode() {
    let (_s, api) = client();
    let summary = api::weekly::summary(&api, 2026, 35).unwrap();
    assert_eq!(summary.total_mentions, 800);
    assert_eq!(summary.mention_change_rate, Some(-4.2));

    let report = api::weekly::teacher_report(&api, 11, 2026, 35).unwrap();
    assert_eq!(report.weekly_rank, Some(1));

    let trend = api::weekly::teacher_trend(&api, 11, 8).unwrap();
    assert_eq!(trend.len(), 2);
    // explicit label wins; missing label falls back to the week number
    assert_eq!(trend[0].label(), "34주차");
    assert_eq!(trend[1].label(), "W35");

    let full = api::weekly::report(&api, 2026, 35).unwrap();
    assert_eq!(full[0].neutral_count, 30);

    let academy = api::weekly::academy_stats(&api, 1, 2026, 35).unwrap();
    assert_eq!(academy.total_teachers, 9);
    let academy_trend = api::weekly::academy_trend(&api, 1, 8).unwrap();
    assert_eq!(academy_trend[0].mention_count, 300);
}

#[test]
fn period_reports_cover_weekly_and_monthly() {
    let (_s, api) = client();
    let weekly = api::reports::weekly(&api, 2026, 35).unwrap();
    assert_eq!(weekly.period_type, "weekly");
    assert_eq!(weekly.total_mentions, 800);

    let monthly = api::reports::monthly(&api, 2026, 8).unwrap();
    assert_eq!(monthly.period_type, "monthly");
    assert!(monthly.teacher_summaries.is_empty());
}

#[test]
fn crawl_logs_keep_error_messages() {
    let (_s, api) = client();
    let logs = api::crawl::logs(&api, 5).unwrap();
    assert_eq!(logs.len(), 2);
    assert!(!logs[0].is_running());
    assert_eq!(logs[1].error_message.as_deref(), Some("timeout"));
}

#[test]
fn legacy_reputation_endpoints_decode() {
    let (_s, api) = client();
    let rows = api::legacy::reputation(&api).unwrap();
    assert_eq!(rows[0].keyword, "대성학원");
    assert_eq!(rows[0].score, Some(0.7));

    let stats = api::legacy::stats(&api, "대성학원").unwrap();
    assert_eq!(stats.total_posts, 230);
    assert_eq!(stats.monthly_stats.len(), 2);
    assert_eq!(stats.monthly_stats[1].post_count, 130);
}

#[test]
fn non_json_success_body_maps_to_decode_error() {
    let (_s, api) = client();
    let err = api::academies::stats(&api, 9, None).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "got {err}");
}

#[test]
fn list_endpoints_answer_promptly() {
    let (_s, api) = client();
    let started = std::time::Instant::now();
    api::academies::all(&api).unwrap();
    api::teachers::all(&api, None).unwrap();
    assert!(started.elapsed() < std::time::Duration::from_secs(2));
}

#[test]
fn unknown_path_maps_to_status_error() {
    let (_s, api) = client();
    let err = api::teachers::by_id(&api, 999).unwrap_err();
    match err {
        ApiError::Status { status, error } => {
            assert_eq!(status, 404);
            assert_eq!(error, "Not Found");
        }
        other => panic!("expected Status error, got {other}"),
    }
}
