use regexbench::{case, engine, Instance};

// Patterns with look-around that only backtracking engines accept.
const LOOK_AROUND: &[&str] =
    &["extract a1", "extract a2", "extract a3", "complex 3", "complex 4"];

#[test]
fn compiled_form_iff_engine_accepts() {
    for (case, found) in case::combinations() {
        let inst = Instance::new(case.name(), found).unwrap();
        for &engine in engine::all() {
            let accepts = engine.compile(case.pattern()).is_ok();
            let has = inst.searcher(engine.name()).is_ok();
            assert_eq!(accepts, has, "{} on '{}'", engine.name(), case.name());
        }
        let accepted = inst.searchers().count();
        let rejected = inst.rejections().count();
        assert_eq!(engine::all().len(), accepted + rejected);
    }
}

#[test]
fn engines_agree_where_they_compile() {
    for (case, found) in case::combinations() {
        let inst = Instance::new(case.name(), found).unwrap();
        let results: Vec<(&str, bool)> = inst
            .searchers()
            .map(|s| (s.engine().name(), s.execute().unwrap()))
            .collect();
        for &(name, got) in results.iter() {
            assert_eq!(
                results[0].1, got,
                "{} disagrees with {} on '{}'",
                name, results[0].0, case.name(),
            );
        }
    }
}

#[test]
fn backtracker_accepts_every_pattern() {
    for case in case::all() {
        assert!(
            engine::find("fancy").unwrap().compile(case.pattern()).is_ok(),
            "fancy rejected '{}'",
            case.name(),
        );
    }
}

#[test]
fn lite_rejects_look_around() {
    for &name in LOOK_AROUND {
        let inst = Instance::new(name, true).unwrap();
        let err = inst.execute("regex-lite").unwrap_err();
        assert!(err.is_compile_rejected(), "{}: {}", name, err);
        assert!(inst.searchers().all(|s| s.engine().name() != "regex-lite"));
        assert!(inst.execute("fancy").unwrap());
    }
}

#[test]
fn decode_matches_its_base_engine() {
    for (case, found) in case::combinations() {
        let inst = Instance::new(case.name(), found).unwrap();
        let base = inst.execute("fancy").unwrap();
        let decoded = inst.execute("fancy+decode").unwrap();
        assert_eq!(base, decoded, "{}", case.name());
    }
}

#[test]
fn decode_reports_rejections_under_its_own_name() {
    let decode = engine::find("fancy+decode").unwrap();
    let err = match decode.compile("(unclosed") {
        Ok(_) => panic!("fancy+decode accepted '(unclosed'"),
        Err(err) => err,
    };
    assert!(err.is_compile_rejected());
    assert!(err.to_string().starts_with("fancy+decode rejected pattern"));
}

#[test]
fn byte_and_text_engines_agree() {
    for (case, found) in case::combinations() {
        let inst = Instance::new(case.name(), found).unwrap();
        let text = inst.execute("regex");
        let bytes = inst.execute("regex-bytes");
        let (text, bytes) = match (text, bytes) {
            (Ok(text), Ok(bytes)) => (text, bytes),
            (Err(_), Err(_)) => continue,
            (t, b) => panic!("{}: {:?} vs {:?}", case.name(), t, b),
        };
        assert_eq!(text, bytes, "{}", case.name());
    }
}
