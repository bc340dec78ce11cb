// src/gui/router.rs
use crate::config::options::PageKind::{ self, * };
use super::pages::{ self, Page };

/// Pages in nav order. TeacherDetail is reached from Teachers, not listed.
pub static PAGES: &[&'static dyn Page] = &[
    &pages::dashboard::PAGE,
    &pages::teachers::PAGE,
    &pages::academies::PAGE,
    &pages::reports::PAGE,
    &pages::weekly::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(kind: &PageKind) -> &'static dyn Page {
    match kind {
        Dashboard     => &pages::dashboard::PAGE,
        Teachers      => &pages::teachers::PAGE,
        TeacherDetail => &pages::teacher_detail::PAGE,
        Academies     => &pages::academies::PAGE,
        DailyReports  => &pages::reports::PAGE,
        WeeklyReports => &pages::weekly::PAGE,
    }
}
