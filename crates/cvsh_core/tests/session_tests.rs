// End-to-end session flows through the executor, backed by an
// in-memory store.

use cvsh_core::storage::{load_palette, load_profile, KvStore, MemoryStore, PROFILE_KEY};
use cvsh_core::{AppContext, Effect, Executor, Invitation, LineKind, Profile};

fn session() -> (Executor, AppContext) {
    (Executor::new(), AppContext::load(Box::new(MemoryStore::new())))
}

#[test]
fn visitor_walkthrough() {
    let (exec, mut ctx) = session();

    exec.run(&mut ctx, "whoami");
    exec.run(&mut ctx, "summary");
    exec.run(&mut ctx, "skills");
    let output = exec.run(&mut ctx, "socials");

    assert!(output.lines.iter().all(|l| l.kind == LineKind::Link));
    // Transcript holds every input echo plus every output line, in order.
    let inputs: Vec<&str> = ctx
        .transcript
        .lines()
        .iter()
        .filter(|l| l.kind == LineKind::Input)
        .map(|l| l.text.as_str())
        .collect();
    assert_eq!(
        inputs,
        vec!["Karthi> whoami", "Karthi> summary", "Karthi> skills", "Karthi> socials"]
    );
}

#[test]
fn owner_edit_session_persists_across_reload() {
    let exec = Executor::new();

    // Shared backing blob: edit in one session, observe in the next.
    let mut first = AppContext::load(Box::new(MemoryStore::new()));
    exec.run(&mut first, "admin");
    exec.run(&mut first, "set title Lead Engineer");
    exec.run(&mut first, "customize accent #ff4757");

    let profile_json = serde_json::to_string(&first.profile).unwrap();
    let palette_json = serde_json::to_string(&first.palette).unwrap();

    let mut store = MemoryStore::new();
    store.put(PROFILE_KEY, &profile_json).unwrap();
    store.put("palette", &palette_json).unwrap();

    let second = AppContext::load(Box::new(store));
    assert_eq!(second.profile.personal.title, "Lead Engineer");
    assert_eq!(second.palette.accent, "#ff4757");
    // Everything untouched by `set` is still the default.
    assert_eq!(second.profile.skills, Profile::default().skills);
}

#[test]
fn corrupt_store_never_reaches_the_visitor() {
    let mut store = MemoryStore::new();
    store.put(PROFILE_KEY, "{\"personal\": 42}").unwrap();
    store.put("palette", "not json at all").unwrap();

    assert_eq!(load_profile(&store), Profile::default());
    assert_eq!(load_palette(&store), Default::default());

    let mut ctx = AppContext::load(Box::new(store));
    let output = Executor::new().run(&mut ctx, "about");
    assert!(output.lines.iter().any(|l| l.text.contains("Karthi G")));
}

#[test]
fn invitation_flow_builds_a_mailto_link() {
    let (_, ctx) = session();
    let invitation = Invitation {
        recruiter: "Jane".into(),
        company: "Acme".into(),
        location: "NYC".into(),
        date: "2024-01-01".into(),
    };
    let link = Executor::invitation_link(&ctx, &invitation);
    assert!(link.starts_with("mailto:gkarthi.ui@gmail.com?subject="));
    assert!(link.contains("Acme"));
}

#[test]
fn effects_reach_the_caller() {
    let (exec, mut ctx) = session();
    assert_eq!(exec.run(&mut ctx, "card").effect, Effect::FlipCard);
    assert_eq!(exec.run(&mut ctx, "invite").effect, Effect::OpenInviteForm);
    assert_eq!(exec.run(&mut ctx, "clear").effect, Effect::ClearTranscript);
    assert_eq!(exec.run(&mut ctx, "exit").effect, Effect::Exit);
    assert_eq!(exec.run(&mut ctx, "help").effect, Effect::None);
}
