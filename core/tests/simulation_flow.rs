//! End-to-end flow over the bundled catalog: transcript, template
//! resolution, replay, and dashboard accumulation.

mod common;

use chrono::Duration;
use socrange_core::api::{
    catalog, populate_at, transcript_for, AlertAction, AlertStatus, DashboardState, Emission,
    ReplayPhase,
};

#[test]
fn ransomware_scenario_plays_end_to_end() {
    let use_case = catalog::find("1").expect("bundled catalog has use case 1");

    let transcript = transcript_for(use_case);
    assert_eq!(transcript.len(), use_case.simulation_flow.len());
    assert_eq!(
        transcript[0],
        "[*] Initializing ransomware payload for WIN-SERVER-01..."
    );
    assert_eq!(
        transcript.last().unwrap(),
        "--- Simulation Complete --- Redirecting to SOAR Dashboard ---"
    );

    let data = populate_at(
        &use_case.soar_data_template_id,
        &use_case.soar_data_params,
        common::base_time(),
    );
    assert!(!data.alerts.is_empty());
    assert!(!data.event_stream.is_empty());
    assert_eq!(data.alerts[0].id, "TRI-RNSM001");
    assert_eq!(data.alerts[0].source_ip, "192.168.1.158");

    let total = data.alerts.len() + data.event_stream.len();
    let (mut scheduler, clock) = common::fixed_scheduler(1_500);
    scheduler.start(&data).unwrap();
    assert_eq!(scheduler.plan_len(), total);

    let mut dashboard = DashboardState::new();
    let mut last_ts = String::new();
    while let Some(emission) = scheduler.tick() {
        let ts = match &emission {
            Emission::Alert(alert) => alert.timestamp.clone(),
            Emission::Event(event) => event.timestamp.clone(),
        };
        // Emissions are stamped with live clock time, not template time.
        assert!(ts >= last_ts);
        last_ts = ts;
        clock.advance(Duration::milliseconds(1_500));
        dashboard.absorb(emission);
    }

    assert_eq!(scheduler.phase(), ReplayPhase::Idle);
    assert_eq!(dashboard.alerts.len(), data.alerts.len());
    assert_eq!(dashboard.logs.len(), data.event_stream.len());

    // Newest alert first; event order is plan order.
    assert!(dashboard.logs[0].timestamp <= dashboard.logs[1].timestamp);

    let kpis = dashboard.kpis();
    assert_eq!(kpis.total_alerts, dashboard.alerts.len());
    assert_eq!(kpis.active_alerts, dashboard.alerts.len());
}

#[test]
fn replayed_items_carry_fresh_identity() {
    let use_case = catalog::find("2").unwrap();
    let data = populate_at(
        &use_case.soar_data_template_id,
        &use_case.soar_data_params,
        common::base_time(),
    );

    let (mut scheduler, _clock) = common::fixed_scheduler(1_500);
    scheduler.start(&data).unwrap();

    let mut alert_ids = Vec::new();
    while let Some(emission) = scheduler.tick() {
        if let Emission::Alert(alert) = emission {
            // Template ids like TRI-CRDS002 never reach the feed verbatim.
            assert!(!alert.id.starts_with("TRI-"));
            alert_ids.push(alert.id);
        }
    }
    assert!(!alert_ids.is_empty());
    let mut dedup = alert_ids.clone();
    dedup.sort();
    dedup.dedup();
    assert_eq!(dedup.len(), alert_ids.len());
}

#[test]
fn triage_actions_flow_through_the_dashboard() {
    let use_case = catalog::find("6").unwrap();
    let data = populate_at(
        &use_case.soar_data_template_id,
        &use_case.soar_data_params,
        common::base_time(),
    );

    let (mut scheduler, _clock) = common::fixed_scheduler(1_500);
    scheduler.start(&data).unwrap();

    let mut dashboard = DashboardState::new();
    while let Some(emission) = scheduler.tick() {
        dashboard.absorb(emission);
    }

    let target = dashboard.alerts[0].id.clone();
    assert!(dashboard.apply_action(&target, AlertAction::Escalate));
    assert_eq!(dashboard.alerts[0].status, AlertStatus::Escalated);
    assert!(!dashboard.apply_action(&target, AlertAction::Resolve));

    let kpis = dashboard.kpis();
    assert_eq!(kpis.active_alerts, dashboard.alerts.len() - 1);
}

#[test]
fn every_use_case_produces_a_playable_session() {
    for use_case in catalog::all() {
        let transcript = transcript_for(use_case);
        assert!(
            transcript.iter().all(|line| !line.starts_with("[?]")),
            "use case {} renders an unrecognized line",
            use_case.id
        );

        let data = populate_at(
            &use_case.soar_data_template_id,
            &use_case.soar_data_params,
            common::base_time(),
        );
        assert!(
            !data.alerts.is_empty() && !data.event_stream.is_empty(),
            "use case {} resolved to an empty session",
            use_case.id
        );

        let (mut scheduler, _clock) = common::fixed_scheduler(1_500);
        scheduler.start(&data).unwrap();
        let emitted = std::iter::from_fn(|| scheduler.tick()).count();
        assert_eq!(emitted, data.alerts.len() + data.event_stream.len());
    }
}
