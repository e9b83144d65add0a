use axistags_core::{AxisInfo, AxisTags, AxisType, StorageOrder};
use axistags_perm::{
    is_permutation, permutation_from_normal_order, permutation_from_numpy_order,
    permutation_to_normal_order, permutation_to_numpy_order,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

const MASKS: [AxisType; 9] = [
    AxisType::ALL_AXES,
    AxisType::NON_CHANNEL,
    AxisType::UNKNOWN,
    AxisType::CHANNELS,
    AxisType::SPACE,
    AxisType::TIME,
    AxisType::FREQUENCY,
    AxisType::ANGLE,
    AxisType::EDGE,
];

fn random_tags(rng: &mut StdRng) -> AxisTags {
    let pool = [
        AxisInfo::x(),
        AxisInfo::y(),
        AxisInfo::z(),
        AxisInfo::t(),
        AxisInfo::e(),
        AxisInfo::fx(),
        AxisInfo::ft(),
        AxisInfo::new("a", AxisType::ANGLE, 0.0, ""),
        AxisInfo::default(),
    ];
    let len = rng.gen_range(0..7);
    let mut tags = AxisTags::new();
    for _ in 0..len {
        let info = pool[rng.gen_range(0..pool.len())].clone();
        tags.push(info.with_resolution(rng.gen_range(0.0..4.0))).unwrap();
    }
    if rng.gen_bool(0.5) {
        let order = if rng.gen_bool(0.5) {
            StorageOrder::RowMajor
        } else {
            StorageOrder::ColumnMajor
        };
        tags.insert_channel_axis(order).unwrap();
    }
    tags
}

#[test]
fn test_normal_order_permutations_are_inverse() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let tags = random_tags(&mut rng);
        for mask in MASKS {
            let to = permutation_to_normal_order(&tags, mask);
            let from = permutation_from_normal_order(&tags, mask);
            let selected = tags.axis_type_count(mask);
            assert!(is_permutation(&to, selected), "{tags} mask {mask}");
            assert!(is_permutation(&from, selected));
            for i in 0..selected {
                assert_eq!(to[from[i]], i);
                assert_eq!(from[to[i]], i);
            }
        }
    }
}

#[test]
fn test_normal_order_is_sorted() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let tags = random_tags(&mut rng);
        let perm = permutation_to_normal_order(&tags, AxisType::ALL_AXES);
        let mut sorted = tags.clone();
        sorted.permute(&perm).unwrap();
        for pair in sorted.iter().collect::<Vec<_>>().windows(2) {
            assert_ne!(
                pair[0].normal_order_cmp(pair[1]),
                std::cmp::Ordering::Greater,
                "{sorted} not in normal order"
            );
        }
    }
}

#[test]
fn test_numpy_order_places_channel_like_insertion() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let tags =
            AxisTags::from_axes(random_tags(&mut rng).into_iter().filter(|a| !a.is_channel()))
                .unwrap();
        for order in [StorageOrder::RowMajor, StorageOrder::ColumnMajor] {
            let mut with_channel = tags.clone();
            with_channel.insert_channel_axis(order).unwrap();
            let perm = permutation_to_numpy_order(&with_channel, order);
            let mut storage = with_channel.clone();
            storage.permute(&perm).unwrap();
            let expected = order.channel_position(tags.len());
            assert_eq!(storage.channel_index(), Some(expected), "{storage} for {order}");

            let inv = permutation_from_numpy_order(&with_channel, order);
            storage.permute(&inv).unwrap();
            assert_eq!(storage, with_channel);
        }
    }
}
