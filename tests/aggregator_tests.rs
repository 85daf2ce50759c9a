use callchain_miner::aggregator::{
    reconstruct_files, CallChainReconstructor, FrequencyTables, Transition, TransitionSink,
};
use callchain_miner::commands::mine_trace;
use callchain_miner::parser::{parse_trace, Edge, Relation, SymbolSet};

const SEPARATOR: &str = "--------------------";

fn lib_symbols() -> SymbolSet {
    SymbolSet::from_members("lib", ["open", "connect", "socket"]).unwrap()
}

#[test]
fn test_end_to_end_example() {
    let trace = format!(
        "lib.open --becomes-- x\nx --calls-- read\nx --calls-- close\nx --dies--\n{}\n",
        SEPARATOR
    );
    let symbols = lib_symbols();

    let mut emitted: Vec<Transition> = Vec::new();
    reconstruct_files(parse_trace(&trace), &symbols, &mut emitted);
    assert_eq!(
        emitted,
        vec![
            Transition::new("lib.open", "lib.open", "lib.read"),
            Transition::new("lib.open", "lib.read", "lib.close"),
        ]
    );

    let (tables, _) = mine_trace(&trace, &symbols);
    let global: Vec<(&str, u64)> = tables.global().iter().collect();
    assert_eq!(
        global,
        vec![("lib.open -> lib.read", 1), ("lib.read -> lib.close", 1)]
    );

    let by_origin: Vec<(&str, u64)> = tables.origin("lib.open").unwrap().iter().collect();
    assert_eq!(by_origin, global);
    assert_eq!(tables.origin_count(), 1);
}

#[test]
fn test_unbound_variables_produce_no_updates() {
    let trace = "y --calls-- read\ny --dies--\nz --calls-- write\n";
    let (tables, stats) = mine_trace(trace, &lib_symbols());

    assert!(tables.is_empty());
    assert_eq!(stats.transitions, 0);
    assert_eq!(stats.edges, 3);
}

#[test]
fn test_rebinding_emits_nothing_and_keeps_old_chain() {
    let symbols = lib_symbols();
    let mut reconstructor = CallChainReconstructor::new(&symbols);
    let mut emitted: Vec<Transition> = Vec::new();

    let edges = vec![
        Edge::new("lib.open", Relation::Becomes, "x"),
        Edge::new("x", Relation::Calls, "read"),
        Edge::new("x", Relation::Calls, "seek"),
    ];
    reconstructor.reconstruct_file(&edges, &mut emitted);
    let before = reconstructor.chain("lib.open").unwrap().to_vec();
    let emitted_before = emitted.len();

    let rebind = Edge::new("lib.connect", Relation::Becomes, "x");
    assert!(!reconstructor.apply(&rebind, &mut emitted));
    assert_eq!(emitted.len(), emitted_before);
    assert_eq!(reconstructor.chain("lib.open").unwrap(), before.as_slice());

    reconstructor.apply(&Edge::new("x", Relation::Calls, "send"), &mut emitted);
    assert_eq!(reconstructor.chain("lib.open").unwrap(), before.as_slice());
    assert_eq!(
        emitted.last().unwrap(),
        &Transition::new("lib.connect", "lib.connect", "lib.send")
    );
}

#[test]
fn test_transitions_are_consecutive_chain_pairs() {
    let trace = "lib.socket --becomes-- s\n\
                 s --calls-- bind\n\
                 s --calls-- listen\n\
                 s --calls-- accept\n\
                 s --calls-- close\n";
    let symbols = lib_symbols();
    let mut emitted: Vec<Transition> = Vec::new();
    reconstruct_files(parse_trace(trace), &symbols, &mut emitted);

    let sequence = ["lib.socket", "lib.bind", "lib.listen", "lib.accept", "lib.close"];
    let expected: Vec<(&str, &str)> = sequence.windows(2).map(|w| (w[0], w[1])).collect();
    let actual: Vec<(&str, &str)> = emitted
        .iter()
        .map(|t| (t.previous.as_str(), t.current.as_str()))
        .collect();

    assert_eq!(actual, expected);
}

#[test]
fn test_global_equals_sum_of_origin_tables() {
    let trace = format!(
        "lib.open --becomes-- f\nf --calls-- read\nf --calls-- close\n\
         lib.connect --becomes-- c\nc --calls-- read\nc --calls-- close\n{0}\n\
         lib.open --becomes-- g\ng --calls-- read\n",
        SEPARATOR
    );
    let (tables, _) = mine_trace(&trace, &lib_symbols());

    for (key, count) in tables.global().iter() {
        let summed: u64 = tables
            .origins()
            .filter_map(|(_, table)| table.get(key))
            .sum();
        assert_eq!(summed, count, "mismatch for {}", key);
    }
    assert_eq!(tables.global().get("lib.read -> lib.close"), Some(2));
}

#[test]
fn test_aggregation_is_order_independent() {
    let files = [
        "lib.open --becomes-- f\nf --calls-- read\nf --calls-- close\n",
        "lib.connect --becomes-- c\nc --calls-- send\n",
        "lib.open --becomes-- f\nf --calls-- write\n",
    ];
    let separator = format!("{}\n", SEPARATOR);
    let forward = files.join(separator.as_str());
    let mut reversed_files = files;
    reversed_files.reverse();
    let backward = reversed_files.join(separator.as_str());

    let symbols = lib_symbols();
    let (a, _) = mine_trace(&forward, &symbols);
    let (b, _) = mine_trace(&backward, &symbols);

    assert_eq!(a, b);
}

#[test]
fn test_consecutive_boundaries_are_harmless() {
    let trace = format!("{0}\n{0}\n__FILENAME__ empty.py\n{0}\n", SEPARATOR);
    let mut tables = FrequencyTables::new();
    let stats = reconstruct_files(parse_trace(&trace), &lib_symbols(), &mut tables);

    assert_eq!(stats.files, 0);
    assert!(tables.is_empty());
}

#[test]
fn test_empty_input_yields_empty_tables() {
    let (tables, stats) = mine_trace("", &lib_symbols());
    assert!(tables.is_empty());
    assert_eq!(stats.files, 0);
}

#[test]
fn test_parallel_partial_tables_merge() {
    let symbols = lib_symbols();
    let first = "lib.open --becomes-- f\nf --calls-- read\n";
    let second = "lib.open --becomes-- f\nf --calls-- read\nf --calls-- close\n";

    let (mut merged, _) = mine_trace(first, &symbols);
    let (other, _) = mine_trace(second, &symbols);
    merged.merge(&other);

    let (combined, _) = mine_trace(&format!("{}{}\n{}", first, SEPARATOR, second), &symbols);
    assert_eq!(merged, combined);
    assert_eq!(merged.global().get("lib.open -> lib.read"), Some(2));
}

#[test]
fn test_custom_sink_receives_transitions() {
    #[derive(Default)]
    struct Counter(usize);

    impl TransitionSink for Counter {
        fn record(&mut self, _transition: Transition) {
            self.0 += 1;
        }
    }

    let trace = "lib.open --becomes-- f\nf --calls-- read\nf --calls-- close\n";
    let mut counter = Counter::default();
    let stats = reconstruct_files(parse_trace(trace), &lib_symbols(), &mut counter);

    assert_eq!(counter.0, 2);
    assert_eq!(stats.transitions, 2);
}
