use approx::assert_relative_eq;
use axistags_core::{AxisInfo, AxisTags, AxisTagsError, AxisType, StorageOrder};
use axistags_index::{output_rank, parse_index, transform, IndexItem, SliceSpec};

fn tags_with_resolution() -> AxisTags {
    let mut tags = AxisTags::from_axes([
        AxisInfo::t().with_resolution(0.5),
        AxisInfo::x().with_resolution(1.25),
        AxisInfo::y().with_resolution(2.0),
    ])
    .unwrap();
    tags.insert_channel_axis(StorageOrder::RowMajor).unwrap();
    tags
}

#[test]
fn test_full_slice_index_then_ellipsis() {
    let old = AxisTags::from_axes([
        AxisInfo::new("x", AxisType::SPACE, 1.0, ""),
        AxisInfo::new("y", AxisType::SPACE, 1.0, ""),
        AxisInfo::new("c", AxisType::CHANNELS, 0.0, ""),
    ])
    .unwrap();
    let expr = [
        IndexItem::Slice(SliceSpec::full()),
        IndexItem::Index(2),
        IndexItem::Ellipsis,
    ];
    let new = transform(&old, &expr, 2).unwrap();
    let expected = AxisTags::from_axes([
        AxisInfo::new("x", AxisType::SPACE, 1.0, ""),
        AxisInfo::new("c", AxisType::CHANNELS, 0.0, ""),
    ])
    .unwrap();
    assert_eq!(new, expected);
    assert_eq!(new.channel_index(), Some(1));
}

#[test]
fn test_parsed_expression_matches_built_expression() {
    let built = vec![
        IndexItem::Index(0),
        IndexItem::NewAxis,
        IndexItem::Slice(SliceSpec::new(Some(1), None, Some(3))),
        IndexItem::Ellipsis,
    ];
    assert_eq!(parse_index("[0, None, 1::3, ...]").unwrap(), built);

    let old = tags_with_resolution();
    let rank = output_rank(old.len(), &built).unwrap();
    assert_eq!(rank, 4);
    let new = transform(&old, &built, rank).unwrap();
    assert_eq!(new.to_string(), "? x y c");
    assert_relative_eq!(new[1].resolution(), 3.75);
    assert_relative_eq!(new[2].resolution(), 2.0);
}

#[test]
fn test_reverse_slice_negates_resolution() {
    let old = tags_with_resolution();
    let expr = parse_index("::-1").unwrap();
    let new = transform(&old, &expr, 4).unwrap();
    assert_relative_eq!(new[0].resolution(), -0.5);
    for k in 1..old.len() {
        assert_eq!(new[k], old[k]);
    }

    let single = AxisTags::from_axes([AxisInfo::x().with_resolution(1.5)]).unwrap();
    let expr = parse_index("::-2").unwrap();
    let new = transform(&single, &expr, 1).unwrap();
    assert_eq!(new[0], AxisInfo::x().with_resolution(-3.0));
}

#[test]
fn test_drop_channel_by_index() {
    let old = tags_with_resolution();
    let expr = parse_index("..., 0").unwrap();
    let new = transform(&old, &expr, 3).unwrap();
    assert_eq!(new.channel_index(), None);
    assert_eq!(new.to_string(), "t x y");
}

#[test]
fn test_relabel_and_insert() {
    let old = AxisTags::from_keys("xy").unwrap();
    let expr = [
        IndexItem::Insert(AxisInfo::t()),
        IndexItem::from(AxisInfo::z().with_description("depth")),
        IndexItem::Ellipsis,
    ];
    let new = transform(&old, &expr, 3).unwrap();
    assert_eq!(new.to_string(), "t z y");
    assert_eq!(new.description(1).unwrap(), "depth");
}

#[test]
fn test_relabelled_channel_clashes_with_kept_channel() {
    let old = AxisTags::from_keys("xyc").unwrap();
    let expr = [IndexItem::from(AxisInfo::c())];
    let err = transform(&old, &expr, 3).unwrap_err();
    assert!(matches!(err, AxisTagsError::PreconditionViolation(_)));
}

#[test]
fn test_errors_do_not_depend_on_parsing() {
    let old = AxisTags::from_keys("xy").unwrap();
    let expr = parse_index("0, 0, 0").unwrap();
    assert!(matches!(
        transform(&old, &expr, 0),
        Err(AxisTagsError::MalformedExpression(_))
    ));
    let expr = parse_index("..., None, ...").unwrap();
    assert!(matches!(
        output_rank(old.len(), &expr),
        Err(AxisTagsError::MalformedExpression(_))
    ));
}
