use proptest::prelude::*;

use sleeve_wots::{Key, ParamsEncoding};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn compute_pk_is_deterministic(
        secret in prop::array::uniform32(any::<u8>()),
        public in prop::array::uniform32(any::<u8>())
    ) {
        let key = Key::new_from_seed(ParamsEncoding::Level2, secret, public);
        prop_assert_eq!(key.compute_pk(), key.compute_pk());
    }

    #[test]
    fn distinct_secret_seeds_give_distinct_pks(
        a in prop::array::uniform32(any::<u8>()),
        b in prop::array::uniform32(any::<u8>()),
        public in prop::array::uniform32(any::<u8>())
    ) {
        prop_assume!(a != b);
        let pk_a = Key::new_from_seed(ParamsEncoding::Level3, a, public).compute_pk();
        let pk_b = Key::new_from_seed(ParamsEncoding::Level3, b, public).compute_pk();
        prop_assert_ne!(pk_a, pk_b);
    }
}
