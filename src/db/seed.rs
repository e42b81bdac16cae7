// src/db/seed.rs
//
// Dados de demonstração do painel. Não existe backend: tudo que os stores
// mostram na primeira carga nasce aqui.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{
    client::{DownloadPackage, ReviewStep, StepStatus, UploadRecord, UploadStatus},
    desk::{KnowledgeResource, PriorityAlert},
    support::{
        FieldKind, SelectOption, SupportAction, SupportActionId, SupportField, SupportRequestLog,
    },
    workflow::WorkflowAssignment,
    workspace::{Island, IslandVariant, Task, WorkspaceTab, WorkspaceTabId},
};

pub const DEFAULT_CURRENT_TECHNICIAN: &str = "سارا رحیمی";

pub fn technician_options() -> Vec<&'static str> {
    vec!["سارا رحیمی", "محمد رضوی", "مهدی سلیمانی", "فاطمه کریمی"]
}

// --- WORKSPACE ---

pub fn workspace_tabs() -> Vec<WorkspaceTab> {
    let tab = |id, label: &str, description: &str| WorkspaceTab {
        id,
        label: label.to_string(),
        description: description.to_string(),
    };
    vec![
        tab(WorkspaceTabId::Cases, "تابلوی پرونده‌ها", "تمرکز بر مالکیت، ارجاع و هشدار SLA"),
        tab(WorkspaceTabId::Calendar, "مسیر تقویمی", "برنامه‌ریزی بازدیدها و همپوشانی تیم‌ها"),
        tab(WorkspaceTabId::Reports, "میز گزارش‌گیری", "تحلیل کیفیت اجرا و آماده‌سازی خروجی‌ها"),
    ]
}

fn task(id: &str, title: &str, subtitle: &str, img: u8) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        avatar: format!("https://i.pravatar.cc/120?img={img}"),
        has_check: false,
        has_menu: false,
        has_calendar: false,
    }
}

// Cada chamada devolve uma cópia nova, então as abas nunca compartilham tarefas
pub fn journey_base() -> Vec<Island> {
    vec![
        Island {
            id: "intake".into(),
            title: "دریافت و ارجاع".into(),
            variant: IslandVariant::Light,
            tasks: vec![
                Task {
                    has_check: true,
                    has_menu: true,
                    ..task("task-assign", "ارجاع پرونده ارتعاش بدنه", "UTN-2038 · تیم بدنه", 21)
                },
                Task {
                    has_menu: true,
                    ..task("task-brief", "بارگذاری خلاصه مهندسی", "یادداشت بازرسی در انتظار", 35)
                },
                Task {
                    has_calendar: true,
                    ..task("task-sync", "زمان‌بندی جلسه با QA", "نیازمند بازه تقویمی", 49)
                },
            ],
        },
        Island {
            id: "execution".into(),
            title: "اجرای میدانی".into(),
            variant: IslandVariant::Dark,
            tasks: vec![
                Task {
                    has_check: true,
                    has_menu: true,
                    ..task("task-lab", "آزمایشگاه ارتعاش", "ماشین‌آلات · بار موتور", 14)
                },
                Task {
                    has_calendar: true,
                    ..task("task-field", "صحت‌سنجی میدانی", "حوض B · تیم شیفت شب", 18)
                },
            ],
        },
        Island {
            id: "handover".into(),
            title: "تحویل و بستن پرونده".into(),
            variant: IslandVariant::Light,
            tasks: vec![
                Task {
                    has_menu: true,
                    ..task("task-recap", "تهیه گزارش جمع‌بندی", "ارسال برای مدیران", 28)
                },
                Task {
                    has_check: true,
                    ..task("task-signoff", "تایید دیجیتال", "منتظر تایید بازبین ارشد", 40)
                },
            ],
        },
    ]
}

// --- WORKFLOW ---

pub fn initial_assignments() -> Vec<WorkflowAssignment> {
    let wf = |id: &str, utn: &str, title: &str, tech: &str, stage: &str, sla: &str| WorkflowAssignment {
        id: id.to_string(),
        utn: utn.to_string(),
        title: title.to_string(),
        tech: tech.to_string(),
        stage: stage.to_string(),
        sla: sla.to_string(),
    };
    vec![
        wf("wf-1", "UTN-2045", "بدنه / لرزش غیرعادی", "سارا رحیمی", "بازرسی میدانی", "۲ ساعت"),
        wf("wf-2", "UTN-1980", "ماشین‌آلات / نشت روغن", "محمد رضوی", "در انتظار تحویل", "تا پایان امروز"),
        wf("wf-3", "UTN-2101", "الکتریک / قطع مقطعی", "مهدی سلیمانی", "تحلیل آزمایشگاهی", "فردا صبح"),
        wf("wf-4", "UTN-1766", "سیستم عمومی / به‌روزرسانی مدارک", "فاطمه کریمی", "مستندسازی", "در حال اقدام"),
    ]
}

// --- MESA DO TÉCNICO ---

pub fn priority_alerts() -> Vec<PriorityAlert> {
    let alert = |id: &str, title: &str, owner: &str, due: &str| PriorityAlert {
        id: id.to_string(),
        title: title.to_string(),
        owner: owner.to_string(),
        due: due.to_string(),
    };
    vec![
        alert("alert-1", "پروژه بدنه UTN-2045 منتظر تایید طراحی است", "سارا رحیمی", "امروز · ۱۵:۰۰"),
        alert("alert-2", "ارسال خلاصه بازرسی برای یگان ۳", "علی محمدی", "فردا · ۱۰:۳۰"),
        alert("alert-3", "آماده‌سازی گزارش برای تماس مدیران", "فاطمه کریمی", "جمعه · ۰۹:۰۰"),
    ]
}

pub fn knowledge_base() -> Vec<KnowledgeResource> {
    let resource = |id: &str, title: &str, detail: &str| KnowledgeResource {
        id: id.to_string(),
        title: title.to_string(),
        detail: detail.to_string(),
    };
    vec![
        resource("kb-root-cause", "راهنمای تحلیل ریشه‌ای ارتعاش", "چک‌لیست ۱۲ مرحله‌ای برای یافتن سریع منشأ ایراد"),
        resource("kb-report-kit", "الگوی گزارش مدیران", "نسخه آماده ارائه با نمودارهای مقایسه‌ای"),
        resource("kb-field-validation", "بسته معتبرسازی میدانی", "استانداردهای پذیرش برای تیم QA"),
    ]
}

// --- PORTAL DO CLIENTE ---

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .unwrap_or_default()
}

pub fn initial_uploads() -> Vec<UploadRecord> {
    vec![
        UploadRecord {
            id: "upl-1".into(),
            name: "Stability_Calc_v3.xlsx".into(),
            size: "۲.۴ مگابایت".into(),
            status: UploadStatus::Approved,
            uploaded_at: at(2025, 11, 7, 9, 15),
        },
        UploadRecord {
            id: "upl-2".into(),
            name: "Machinery_Layout.pdf".into(),
            size: "۵.۸ مگابایت".into(),
            status: UploadStatus::PendingReview,
            uploaded_at: at(2025, 11, 8, 13, 42),
        },
        UploadRecord {
            id: "upl-3".into(),
            name: "Electrical_SingleLine.dwg".into(),
            size: "۱۱.۶ مگابایت".into(),
            status: UploadStatus::NeedsAction,
            uploaded_at: at(2025, 11, 8, 15, 10),
        },
    ]
}

pub fn review_steps() -> Vec<ReviewStep> {
    let step = |id: &str, title: &str, status, detail: &str| ReviewStep {
        id: id.to_string(),
        title: title.to_string(),
        status,
        detail: detail.to_string(),
    };
    vec![
        step("intake", "دریافت و کنترل مدارک", StepStatus::Done, "تمام فایل‌های ارسالی صحت‌سنجی شده‌اند"),
        step("compliance", "بازبینی انطباق", StepStatus::Active, "معماران دریایی در حال بررسی یادداشت‌های باز هستند"),
        step("quality", "کنترل کیفیت", StepStatus::Waiting, "بلافاصله بعد از تایید انطباق آغاز می‌شود"),
        step("handover", "تحویل نهایی", StepStatus::Waiting, "پس از تایید پرداخت، لینک‌ها فعال می‌شوند"),
    ]
}

pub fn download_packages() -> Vec<DownloadPackage> {
    vec![
        DownloadPackage {
            id: "pkg-1".into(),
            title: "گزارش اولیه و ریسک‌ها".into(),
            description: "جمع‌بندی مدیریتی همراه با نقاط توقف فعلی".into(),
            size: "۸.۴ مگابایت".into(),
            requires_payment: false,
        },
        DownloadPackage {
            id: "pkg-2".into(),
            title: "بسته گواهی نهایی".into(),
            description: "محاسبات امضا شده، تاییدیه‌ها و ردگیری تغییرات".into(),
            size: "۲۴.۱ مگابایت".into(),
            requires_payment: true,
        },
    ]
}

// --- SUPORTE ---

fn text_field(id: &str, label: &str) -> SupportField {
    SupportField {
        id: id.to_string(),
        label: label.to_string(),
        kind: FieldKind::Text,
    }
}

fn select_field(id: &str, label: &str, options: &[(&str, &str)]) -> SupportField {
    SupportField {
        id: id.to_string(),
        label: label.to_string(),
        kind: FieldKind::Select {
            options: options
                .iter()
                .map(|(value, label)| SelectOption {
                    value: value.to_string(),
                    label: label.to_string(),
                })
                .collect(),
        },
    }
}

pub fn support_actions() -> Vec<SupportAction> {
    vec![
        SupportAction {
            id: SupportActionId::Ticket,
            title: "ثبت تیکت فنی".into(),
            detail: "گزارش ایراد یا درخواست بررسی".into(),
            sla: Some("پاسخ در کمتر از ۲ ساعت".into()),
            fields: vec![
                text_field("subject", "موضوع"),
                select_field("priority", "اولویت", &[("high", "بالا"), ("normal", "عادی"), ("low", "پایین")]),
                SupportField {
                    id: "description".into(),
                    label: "توضیحات".into(),
                    kind: FieldKind::Textarea,
                },
            ],
        },
        SupportAction {
            id: SupportActionId::Chat,
            title: "گفتگو با مهندس آماده‌باش".into(),
            detail: "ارتباط فوری با مهندس نوبت".into(),
            sla: Some("میانگین پاسخ‌گویی ۶ دقیقه".into()),
            fields: vec![text_field("subject", "موضوع")],
        },
        SupportAction {
            id: SupportActionId::Meeting,
            title: "رزرو جلسه هم‌آهنگی".into(),
            detail: "انتخاب بازه ۳۰ دقیقه‌ای با تیم QA".into(),
            sla: None,
            fields: vec![
                select_field("duration", "مدت", &[("30", "۳۰ دقیقه"), ("60", "۶۰ دقیقه")]),
                text_field("day", "روز"),
            ],
        },
        SupportAction {
            id: SupportActionId::SecureRoom,
            title: "اتاق داده ایمن".into(),
            detail: "اشتراک فایل با رمزگذاری AES-256".into(),
            sla: None,
            fields: vec![text_field("recipient", "گیرنده")],
        },
    ]
}

pub fn initial_support_logs() -> Vec<SupportRequestLog> {
    let log = |request_id: &str, action_id, title: &str, summary: &str, submitted_at: &str| SupportRequestLog {
        request_id: request_id.to_string(),
        action_id,
        title: title.to_string(),
        summary: summary.to_string(),
        submitted_at: submitted_at.to_string(),
    };
    vec![
        log("SR-7421", SupportActionId::Ticket, "تیکت کیفیت خط تولید", "موضوع: افت فشار · اولویت: بالا", "امروز · ۰۸:۴۵"),
        log("SR-7415", SupportActionId::Chat, "گفتگو با مهندس آماده‌باش", "موضوع: قطع مقطعی برق", "دیروز · ۱۹:۱۰"),
        log("SR-7388", SupportActionId::Meeting, "رزرو جلسه هم‌آهنگی QA", "۳۰ دقیقه · سه‌شنبه", "دیروز · ۱۵:۲۰"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn journey_task_ids_are_globally_unique() {
        let islands = journey_base();
        let ids: Vec<_> = islands.iter().flat_map(|i| i.tasks.iter().map(|t| t.id.clone())).collect();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), 7);
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn every_seed_assignment_is_classified() {
        for assignment in initial_assignments() {
            assert!(!assignment.columns().is_empty(), "{} sem coluna", assignment.id);
        }
    }
}
