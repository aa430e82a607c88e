//! End-to-end resolution scenarios through a configured engine.

use chrono::{DateTime, Duration, TimeZone, Utc};
use decision_engine::{DecisionEngine, EngineConfig};
use decision_types::{
    AdvancementReason, Candidate, CandidateId, DecisionKind, DecisionSource, PrivacyChoice,
    Proposal, ProposalStatus, Recommendation, SettingKey, Visibility, VoteTally,
};
use std::io::Write;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn engine() -> DecisionEngine {
    init_tracing();
    DecisionEngine::new(EngineConfig::default()).unwrap()
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 1, 18, 30, 0).unwrap()
}

fn candidates(percentages: &[u64]) -> Vec<Candidate> {
    percentages
        .iter()
        .enumerate()
        .map(|(i, pct)| Candidate::new(CandidateId::new(format!("cand-{}", i)), *pct, *pct as f64))
        .collect()
}

#[test]
fn community_setting_approved_at_64_percent() {
    let engine = engine();
    let resolver = engine.proposal_resolver(DecisionKind::CommunitySetting).unwrap();

    let proposal = Proposal::new(
        SettingKey::new("post_visibility"),
        Visibility::Public,
        Visibility::FriendsOnly,
        250,
        now() - Duration::days(2),
        resolver.config(),
    )
    .with_votes(160, 30);

    let resolution = resolver.resolve(&proposal, &[], now());
    assert_eq!(resolution.status, ProposalStatus::Active);
    assert_eq!(resolution.effective_value, Visibility::FriendsOnly);
    assert_eq!(resolution.approval_percentage, 64);
}

#[test]
fn member_recommendation_outranks_qualifying_approval() {
    let engine = engine();
    let resolver = engine.proposal_resolver(DecisionKind::CommunitySetting).unwrap();

    let proposal = Proposal::new(
        SettingKey::new("post_visibility"),
        Visibility::Public,
        Visibility::FriendsOnly,
        250,
        now() - Duration::days(2),
        resolver.config(),
    )
    .with_votes(200, 0);
    let recommendation = Recommendation::new(SettingKey::new("post_visibility"), Visibility::CommunityOnly, 250)
        .for_proposal(proposal.id.clone())
        .with_support(180);

    let resolution = resolver.resolve(&proposal, &[recommendation.clone()], now());
    assert_eq!(resolution.status, ProposalStatus::MemberOverride);
    assert_eq!(resolution.effective_value, Visibility::CommunityOnly);
    assert_eq!(resolution.source, DecisionSource::MemberRecommendation(recommendation.id));
}

#[test]
fn proposal_expires_after_configured_days() {
    let engine = engine();
    let resolver = engine.proposal_resolver(DecisionKind::CommunitySetting).unwrap();

    let proposal = Proposal::new(
        SettingKey::new("chat_enabled"),
        true,
        false,
        40,
        now() - Duration::days(8),
        resolver.config(),
    )
    .with_votes(40, 0);

    let resolution = resolver.resolve(&proposal, &[], now());
    assert_eq!(resolution.status, ProposalStatus::Expired);
    assert!(resolution.effective_value);
}

#[test]
fn impeachment_privacy_needs_seventy_percent_of_members() {
    let engine = engine();
    let resolver = engine.binary_resolver(DecisionKind::ImpeachmentPrivacy).unwrap();

    let short = resolver.resolve((PrivacyChoice::Visible, 10), (PrivacyChoice::Hidden, 68), 100);
    assert_eq!(short.winner, None);
    assert_eq!(short.votes_needed_b, 2);

    let passed = resolver.resolve((PrivacyChoice::Visible, 10), (PrivacyChoice::Hidden, 70), 100);
    assert_eq!(passed.winner, Some(PrivacyChoice::Hidden));
}

#[test]
fn tiny_population_cannot_hide() {
    let engine = engine();
    let resolver = engine.binary_resolver(DecisionKind::PrivacyVote).unwrap();

    let result = resolver.resolve((PrivacyChoice::Visible, 0), (PrivacyChoice::Hidden, 250), 5);
    assert!(!result.is_threshold_met);
    assert_eq!(result.winner, None);
}

#[test]
fn visibility_vote_by_plurality() {
    let engine = engine();
    let resolver = engine.multi_option_resolver::<Visibility>().unwrap();

    let tally = VoteTally::new()
        .with_votes(Visibility::Public, 9)
        .with_votes(Visibility::CommunityOnly, 14)
        .with_votes(Visibility::FriendsOnly, 7)
        .with_votes(Visibility::OnlyMe, 2);

    let result = resolver.resolve(&tally, 120);
    assert_eq!(result.winner, Visibility::CommunityOnly);
    assert_eq!(result.percentage, 44);
    assert!(result.is_plurality);
    assert_eq!(result.turnout_percentage, 27);
}

#[test]
fn primary_two_auto_qualifiers_advance() {
    let engine = engine();
    let outcome = engine
        .advancement_resolver()
        .resolve(&candidates(&[40, 30, 15, 10, 5]));

    assert_eq!(outcome.advancing_count(), 2);
    assert_eq!(outcome.auto_qualified_count, 2);
    for (i, reason) in [
        AdvancementReason::AutoQualified,
        AdvancementReason::AutoQualified,
        AdvancementReason::NotAdvancing,
        AdvancementReason::NotAdvancing,
        AdvancementReason::NotAdvancing,
    ]
    .into_iter()
    .enumerate()
    {
        let id = CandidateId::new(format!("cand-{}", i));
        assert_eq!(outcome.reason_for(&id), Some(reason));
    }
}

#[test]
fn primary_backfills_second_place() {
    let engine = engine();
    let outcome = engine
        .advancement_resolver()
        .resolve(&candidates(&[30, 20, 15, 10]));

    assert_eq!(outcome.advancing_count(), 2);
    assert_eq!(
        outcome.reason_for(&CandidateId::new("cand-0")),
        Some(AdvancementReason::AutoQualified)
    );
    assert_eq!(
        outcome.reason_for(&CandidateId::new("cand-1")),
        Some(AdvancementReason::TopVotes)
    );
    assert_eq!(outcome.top_votes_count, 1);
}

#[test]
fn engine_from_config_file() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("decisions.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        r#"
[thresholds.community_setting]
approval_threshold = 50
disapproval_threshold = 65
recommendation_threshold = 55
min_votes_required = 3
expiry_days = 2

[advancement]
auto_qualify_threshold = 20
minimum_advancing = 1
maximum_advancing = 3
"#
    )
    .unwrap();

    let engine = DecisionEngine::new(EngineConfig::load(&path).unwrap()).unwrap();
    assert!(engine.proposal_resolver(DecisionKind::PrivacyVote).is_err());

    let resolver = engine.proposal_resolver(DecisionKind::CommunitySetting).unwrap();
    let proposal = Proposal::new(SettingKey::new("allow_ads"), false, true, 4, now(), resolver.config())
        .with_votes(2, 0);
    assert_eq!(proposal.expires_at, now() + Duration::days(2));
    assert_eq!(resolver.resolve(&proposal, &[], now()).status, ProposalStatus::Active);

    let outcome = engine.advancement_resolver().resolve(&candidates(&[22, 21, 20, 19, 18]));
    assert_eq!(outcome.advancing_count(), 3);
}

#[test]
fn resolution_serializes_for_collaborators() {
    let engine = engine();
    let resolver = engine.proposal_resolver(DecisionKind::CommunitySetting).unwrap();
    let proposal = Proposal::new(SettingKey::new("allow_ads"), false, true, 100, now(), resolver.config());

    let json = serde_json::to_value(resolver.resolve(&proposal, &[], now())).unwrap();
    assert_eq!(json["status"], "pending_approval");
    assert_eq!(json["source"]["source"], "undecided");
    assert_eq!(json["progress"]["approval_votes_needed"], 60);
}
