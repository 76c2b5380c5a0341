use chatcmd_core::channels::{SlackCommandGate, SlackSlashCommandConfig, strip_slack_mentions};
use chatcmd_core::commands::{
    AliasIndex, CommandCatalog, CommandGroup, CommandRegistry, HelpOptions, default_catalog,
    render_help,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_classify(c: &mut Criterion) {
    let catalog = default_catalog();
    // Force the lazy alias index before timing.
    catalog.alias_index();

    c.bench_function("classify_help_trigger", |b| {
        b.iter(|| catalog.classify(black_box("菜单")))
    });

    c.bench_function("classify_slash_command", |b| {
        b.iter(|| catalog.classify(black_box("/model claude-opus")))
    });

    c.bench_function("classify_alias_with_args", |b| {
        b.iter(|| catalog.classify(black_box("模型 claude-opus")))
    });

    c.bench_function("classify_plain_text", |b| {
        b.iter(|| catalog.classify(black_box("今天天气怎么样，要不要带伞")))
    });

    let long_input = "字".repeat(2000);
    c.bench_function("classify_long_plain_text", |b| {
        b.iter(|| catalog.classify(black_box(&long_input)))
    });
}

fn bench_alias_index(c: &mut Criterion) {
    let registry = CommandRegistry::with_defaults();

    c.bench_function("alias_index_build", |b| {
        b.iter(|| AliasIndex::build(black_box(&registry)))
    });

    c.bench_function("catalog_cold_first_lookup", |b| {
        b.iter(|| {
            let catalog = CommandCatalog::with_defaults();
            catalog.resolve_alias(black_box("新对话")).map(str::len)
        })
    });
}

fn bench_help(c: &mut Criterion) {
    let registry = default_catalog().registry();

    c.bench_function("render_help_grouped", |b| {
        let options = HelpOptions::default();
        b.iter(|| render_help(black_box(registry.all()), &options))
    });

    c.bench_function("render_help_filtered_flat", |b| {
        let options = HelpOptions {
            show_groups: false,
            groups: Some(vec![CommandGroup::Model, CommandGroup::Session]),
            ..Default::default()
        };
        b.iter(|| render_help(black_box(registry.all()), &options))
    });
}

fn bench_slack(c: &mut Criterion) {
    let message = "<@U024BE7LH> <@U0G9QF9C6|bob>   模型    claude-opus  ";

    c.bench_function("slack_strip_mentions", |b| {
        b.iter(|| strip_slack_mentions(black_box(message)))
    });

    let gate = SlackCommandGate::new(&SlackSlashCommandConfig::default()).unwrap();
    let catalog = default_catalog();
    c.bench_function("slack_gate_classify", |b| {
        b.iter(|| gate.classify(catalog, black_box(message)))
    });
}

criterion_group!(
    benches,
    bench_classify,
    bench_alias_index,
    bench_help,
    bench_slack,
);
criterion_main!(benches);
