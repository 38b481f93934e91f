//! Graph construction and execution-property invariants across the public API.

use lopir::{
    AggOp, DataType, Error, ExecLocation, ExecType, JobType, LopGraph, LopId, ValueType,
};

fn matrix(g: &mut LopGraph, name: &str) -> LopId {
    g.data(name, DataType::Matrix, ValueType::Double).unwrap()
}

#[test]
fn wiring_is_symmetric_for_every_builder() {
    let mut g = LopGraph::new();
    let x = matrix(&mut g, "X");
    let y = matrix(&mut g, "Y");
    let w = matrix(&mut g, "W");
    let ord = g.literal("4", ValueType::Int).unwrap();

    let cm = g
        .central_moment(x, ord, None, DataType::Scalar, ValueType::Double, ExecType::Mr)
        .unwrap();
    let cov = g
        .covariance(x, y, Some(w), DataType::Scalar, ValueType::Double, ExecType::Cp)
        .unwrap();
    let agg = g
        .aggregate(y, AggOp::Min, DataType::Scalar, ValueType::Double, ExecType::Mr)
        .unwrap();
    let rblk = g
        .reblock(w, 1000, DataType::Matrix, ValueType::Double, ExecType::Mr)
        .unwrap();

    for consumer in [cm, cov, agg, rblk] {
        for &input in g.node(consumer).unwrap().inputs() {
            assert!(g.node(input).unwrap().outputs().contains(&consumer));
        }
    }
    // X feeds cm and cov
    assert_eq!(g.node(x).unwrap().outputs(), &[cm, cov]);
}

#[test]
fn arena_order_is_topological() {
    let mut g = LopGraph::new();
    let x = matrix(&mut g, "X");
    let ord = g.literal("2", ValueType::Int).unwrap();
    let cm = g
        .central_moment(x, ord, None, DataType::Scalar, ValueType::Double, ExecType::Mr)
        .unwrap();
    let agg = g
        .aggregate(x, AggOp::Sum, DataType::Scalar, ValueType::Double, ExecType::Cp)
        .unwrap();

    for id in [cm, agg] {
        for &input in g.node(id).unwrap().inputs() {
            assert!(input.get() < id.get());
        }
    }
}

#[test]
fn unknown_inputs_leave_the_graph_untouched() {
    let mut g = LopGraph::new();
    let x = matrix(&mut g, "X");
    let bogus = LopId::new(42);

    let err = g
        .central_moment(x, bogus, None, DataType::Scalar, ValueType::Double, ExecType::Mr)
        .unwrap_err();
    assert!(matches!(err, Error::UnknownNode(_)));

    assert_eq!(g.len(), 1);
    assert!(g.node(x).unwrap().outputs().is_empty());
}

#[test]
fn mr_nodes_carry_distributed_locations() {
    let mut g = LopGraph::new();
    let x = matrix(&mut g, "X");
    let ord = g.literal("2", ValueType::Int).unwrap();

    let cm = g
        .central_moment(x, ord, None, DataType::Scalar, ValueType::Double, ExecType::Mr)
        .unwrap();
    let agg = g
        .aggregate(x, AggOp::Sum, DataType::Scalar, ValueType::Double, ExecType::Mr)
        .unwrap();
    let rblk = g
        .reblock(x, 1000, DataType::Matrix, ValueType::Double, ExecType::Mr)
        .unwrap();

    let cm = &g.node(cm).unwrap().props;
    assert_eq!(cm.location, ExecLocation::MapAndReduce);
    assert!(cm.defines_mr_job);
    assert!(cm.compatible_jobs.contains(JobType::CmCov));

    let agg = &g.node(agg).unwrap().props;
    assert_eq!(agg.location, ExecLocation::Reduce);
    assert!(!agg.defines_mr_job);
    assert!(agg.breaks_alignment);

    let rblk = &g.node(rblk).unwrap().props;
    assert_eq!(rblk.location, ExecLocation::MapAndReduce);
    assert!(rblk.defines_mr_job);
    assert!(rblk.aligner);
}

#[test]
fn reblock_refuses_the_control_program() {
    let mut g = LopGraph::new();
    let x = matrix(&mut g, "X");
    let err = g
        .reblock(x, 1000, DataType::Matrix, ValueType::Double, ExecType::Cp)
        .unwrap_err();
    assert!(matches!(err, Error::InconsistentProperties(_)));
}

#[test]
fn data_nodes_never_emit_instructions() {
    let mut g = LopGraph::new();
    let x = matrix(&mut g, "X");
    let err = g.instructions(x, &[], "out").unwrap_err();
    assert!(matches!(err, Error::Plan(_)));
}

#[test]
fn indexed_emission_matches_scheduler_slot_layout() {
    let mut g = LopGraph::new();
    let x = matrix(&mut g, "X");
    let ord = g.literal("2", ValueType::Int).unwrap();
    let cm = g
        .central_moment(x, ord, None, DataType::Scalar, ValueType::Double, ExecType::Mr)
        .unwrap();

    let inst = g.instructions_indexed(cm, &[0], 1).unwrap();
    assert_eq!(
        inst,
        "MR\u{b0}cm\
         \u{b0}0\u{b7}MATRIX\u{b7}DOUBLE\
         \u{b0}2\u{b7}SCALAR\u{b7}INT\
         \u{b0}1\u{b7}SCALAR\u{b7}DOUBLE"
    );
}
