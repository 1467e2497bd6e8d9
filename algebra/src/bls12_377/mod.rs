/// The number of bytes for a scalar value over BLS12-377.
pub const BLS12_377_SCALAR_LEN: usize = 32;

mod fr;
pub use fr::*;

mod g1;
pub use g1::*;

mod g2;
pub use g2::*;

mod gt;
pub use gt::*;

mod pairing;
pub use pairing::*;

#[cfg(test)]
mod bls12_377_groups_test {
    use crate::{
        bls12_377::{BLS377Gt, BLS377PairingEngine, BLS377Scalar, BLS377G1, BLS377G2},
        prelude::*,
        traits::group_tests::{test_multi_exp, test_scalar_operations, test_scalar_serialization},
    };

    #[test]
    fn test_scalar_ops() {
        test_scalar_operations::<BLS377Scalar>();
    }

    #[test]
    fn scalar_deser() {
        test_scalar_serialization::<BLS377Scalar>();
    }

    #[test]
    fn scalar_from_to_bytes() {
        let small_value = BLS377Scalar::from(165747u32);
        let small_value_bytes = small_value.to_bytes();
        let expected_small_value_bytes: [u8; 32] = [
            115, 135, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0,
        ];
        assert_eq!(small_value_bytes, expected_small_value_bytes);

        let small_value_from_bytes = BLS377Scalar::from_bytes(&small_value_bytes).unwrap();
        assert_eq!(small_value_from_bytes, small_value);
        assert!(BLS377Scalar::from_bytes(&[0u8; 33]).is_err());
    }

    #[test]
    fn field_size() {
        // r = 8444461749428370424248824938781546531375899335154063827935233455917409239041
        let expected: [u8; 32] = [
            0x01, 0x00, 0x00, 0x00, 0x00, 0x80, 0x11, 0x0a, 0x01, 0x00, 0x00, 0xd0, 0xfe, 0x76,
            0xaa, 0x59, 0x01, 0xb0, 0x37, 0x5c, 0x1e, 0x4d, 0xb4, 0x60, 0x56, 0xa5, 0x2c, 0x9a,
            0x5e, 0x65, 0xab, 0x12,
        ];
        assert_eq!(BLS377Scalar::get_field_size_le_bytes(), expected.to_vec());

        let minus_one = BLS377Scalar::one().neg();
        let half = field_size_minus_one_half(&BLS377Scalar::get_field_size_le_bytes());
        // r = 1 mod 4, so -1 is a square; the multiplicative generator is not.
        assert_eq!(minus_one.pow(&half), BLS377Scalar::one());
        let g = BLS377Scalar::multiplicative_generator();
        assert_eq!(g.pow(&half), minus_one);
    }

    /// `(r - 1) / 2` as u64 limbs, least significant first, for an odd `r`.
    fn field_size_minus_one_half(r_le: &[u8]) -> Vec<u64> {
        let mut limbs: Vec<u64> = r_le
            .chunks(8)
            .map(|c| {
                let mut buf = [0u8; 8];
                buf[..c.len()].copy_from_slice(c);
                u64::from_le_bytes(buf)
            })
            .collect();
        limbs[0] -= 1;
        for i in 0..limbs.len() {
            let carry = limbs.get(i + 1).map_or(0, |next| next << 63);
            limbs[i] = (limbs[i] >> 1) | carry;
        }
        limbs
    }

    #[test]
    fn test_multi_exps() {
        test_multi_exp::<BLS377G1>();
        test_multi_exp::<BLS377G2>();
    }

    #[test]
    fn hard_coded_group_elements() {
        let base_gt = BLS377Gt::get_base();
        let expected_base =
            BLS377PairingEngine::pairing(&BLS377G1::get_base(), &BLS377G2::get_base());
        assert_eq!(base_gt, expected_base);
    }

    #[test]
    fn bilinear_properties() {
        let identity_g1 = BLS377G1::get_identity();
        let identity_g2 = BLS377G2::get_identity();
        let identity_gt_computed = BLS377PairingEngine::pairing(&identity_g1, &identity_g2);
        let identity_gt = BLS377Gt::get_identity();
        assert_eq!(identity_gt, identity_gt_computed);

        let mut prng = test_rng();

        let s1 = BLS377Scalar::from(50 + prng.next_u32() % 50);
        let s2 = BLS377Scalar::from(50 + prng.next_u32() % 50);

        let base_g1 = BLS377G1::get_base();
        let base_g2 = BLS377G2::get_base();

        let s1_base_g1 = base_g1.mul(&s1);
        let s2_base_g2 = base_g2.mul(&s2);

        let gt_mapped_element = BLS377PairingEngine::pairing(&s1_base_g1, &s2_base_g2);
        let gt_base_computed = BLS377PairingEngine::pairing(&base_g1, &base_g2);

        assert_eq!(
            gt_mapped_element,
            BLS377PairingEngine::pairing(&base_g1, &s2_base_g2).mul(&s1)
        );
        assert_eq!(gt_mapped_element, gt_base_computed.mul(&s1).mul(&s2));

        let product = BLS377PairingEngine::product_of_pairings(
            &[s1_base_g1, s1_base_g1.neg()],
            &[base_g2, base_g2],
        );
        assert_eq!(product, BLS377Gt::get_identity());
    }

    #[test]
    fn test_g1_raw() {
        let mut prng = test_rng();
        let a = BLS377G1::random(&mut prng);
        let b = BLS377G1::random(&mut prng);
        assert_eq!(BLS377G1::from_raw(a.get_raw()), a);
        assert_eq!(BLS377G1::from_raw(a.get_raw() + b.get_raw()), a.add(&b));
    }

    #[test]
    fn test_serialization_of_points() {
        let mut prng = test_rng();

        let g1 = BLS377G1::random(&mut prng);
        let g1_bytes = g1.to_compressed_bytes();
        assert_eq!(g1_bytes.len(), BLS377G1::COMPRESSED_LEN);
        let g1_recovered = BLS377G1::from_compressed_bytes(&g1_bytes).unwrap();
        assert_eq!(g1, g1_recovered);

        let g1_unchecked = g1.to_unchecked_bytes();
        assert_eq!(g1_unchecked.len(), BLS377G1::unchecked_size());
        assert_eq!(BLS377G1::from_unchecked_bytes(&g1_unchecked).unwrap(), g1);

        let g2 = BLS377G2::random(&mut prng);
        let g2_bytes = g2.to_compressed_bytes();
        assert_eq!(g2_bytes.len(), BLS377G2::COMPRESSED_LEN);
        let g2_recovered = BLS377G2::from_compressed_bytes(&g2_bytes).unwrap();
        assert_eq!(g2, g2_recovered);

        let gt = BLS377Gt::random(&mut prng);
        let gt_bytes = gt.to_compressed_bytes();
        let gt_recovered = BLS377Gt::from_compressed_bytes(&gt_bytes).unwrap();
        assert_eq!(gt, gt_recovered);

        assert!(BLS377G1::from_compressed_bytes(&[1u8; 3]).is_err());
    }

    #[test]
    fn test_serde_encodings() {
        let mut prng = test_rng();
        let s = BLS377Scalar::random(&mut prng);
        let g1 = BLS377G1::random(&mut prng);
        let g2 = BLS377G2::random(&mut prng);
        let gt = BLS377Gt::random(&mut prng);

        let json = serde_json::to_string(&(s, g1, g2, gt)).unwrap();
        let back: (BLS377Scalar, BLS377G1, BLS377G2, BLS377Gt) =
            serde_json::from_str(&json).unwrap();
        assert_eq!(back, (s, g1, g2, gt));

        // human-readable encodings are base64 strings of the compressed bytes
        let g1_json = serde_json::to_string(&g1).unwrap();
        assert_eq!(g1_json, format!("\"{}\"", b64enc(&g1.to_compressed_bytes())));
        let s_json = serde_json::to_string(&s).unwrap();
        assert_eq!(s_json, format!("\"{}\"", b64enc(&s.to_bytes())));

        let bin = bincode::serialize(&(s, g1, g2, gt)).unwrap();
        let back: (BLS377Scalar, BLS377G1, BLS377G2, BLS377Gt) =
            bincode::deserialize(&bin).unwrap();
        assert_eq!(back, (s, g1, g2, gt));

        assert!(serde_json::from_str::<BLS377G1>("\"AAAA\"").is_err());
    }
}
