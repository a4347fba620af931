//! Randen Kernel Constants
//!
//! The round keys are "nothing up my sleeve" numbers: the fractional
//! hexadecimal digits of pi, read 16 digits per 64-bit word.
//!
//! ```text
//! pi = 3.243F6A8885A308D3 13198A2E03707344 A4093822299F31D0 ...
//!        word 0           word 1           word 2
//! ```
//!
//! Round key `i` is `word[2i]` followed by `word[2i + 1]`, each stored
//! little-endian. That is the byte image of the reference `uint64_t` table.
//!
//! Verify: `python3 scripts/generate_round_keys.py`

// =============================================================================
// GEOMETRY
// =============================================================================

/// Size of a single 128-bit block in bytes.
pub const BLOCK_BYTES: usize = 16;

/// Number of 128-bit blocks in the state.
pub const FEISTEL_BLOCKS: usize = 16;

/// Feistel functions (branch pairs) evaluated per round.
pub const FEISTEL_FUNCTIONS: usize = FEISTEL_BLOCKS / 2;

/// 16 rounds for full diffusion across the blocks, plus one.
pub const FEISTEL_ROUNDS: usize = 16 + 1;

/// Total number of round keys consumed by one permutation.
pub const KEYS: usize = FEISTEL_ROUNDS * FEISTEL_FUNCTIONS;

/// Hidden part of the sponge state.
pub const CAPACITY_BYTES: usize = 16;

/// Capacity expressed in blocks.
pub const CAPACITY_BLOCKS: usize = CAPACITY_BYTES / BLOCK_BYTES;

/// Total sponge state size.
pub const STATE_BYTES: usize = FEISTEL_BLOCKS * BLOCK_BYTES;

/// Exposed part of the sponge state (seed input and generator output).
pub const RATE_BYTES: usize = STATE_BYTES - CAPACITY_BYTES;

/// Seed size accepted by `init`/`reseed`: exactly one rate.
pub const SEED_BYTES: usize = RATE_BYTES;

// =============================================================================
// BLOCK SHUFFLE
// =============================================================================

/// After each round, block `b` of the new state is block `SHUFFLE[b]` of the
/// old one. Even blocks land on odd positions and vice versa.
pub const SHUFFLE: [usize; FEISTEL_BLOCKS] = [7, 2, 13, 4, 11, 8, 3, 6, 15, 0, 9, 10, 1, 14, 5, 12];

// =============================================================================
// ROUND KEYS
// =============================================================================

/// A 128-bit block as raw bytes.
pub type Block = [u8; BLOCK_BYTES];

/// Round key table, 32-byte aligned like the state it is applied to.
#[derive(Debug)]
#[repr(C, align(32))]
pub struct RoundKeys([Block; KEYS]);

impl RoundKeys {
    /// All round keys in consumption order.
    pub const fn blocks(&self) -> &[Block; KEYS] {
        &self.0
    }
}

/// Pack the word table into 128-bit blocks (`lo || hi`, little-endian).
const fn pack_round_keys(words: &[u64; 2 * KEYS]) -> RoundKeys {
    let mut keys = [[0u8; BLOCK_BYTES]; KEYS];
    let mut i = 0;
    while i < KEYS {
        let lo = words[2 * i].to_le_bytes();
        let hi = words[2 * i + 1].to_le_bytes();
        let mut j = 0;
        while j < 8 {
            keys[i][j] = lo[j];
            keys[i][j + 8] = hi[j];
            j += 1;
        }
        i += 1;
    }
    RoundKeys(keys)
}

/// Round keys for all 17 rounds, shared by every generator in the process.
pub static ROUND_KEYS: RoundKeys = pack_round_keys(&ROUND_KEY_WORDS);

/// Fractional hex digits of pi, 16 per word.
#[rustfmt::skip]
pub const ROUND_KEY_WORDS: [u64; 2 * KEYS] = [
    0x243F_6A88_85A3_08D3, 0x1319_8A2E_0370_7344,
    0xA409_3822_299F_31D0, 0x082E_FA98_EC4E_6C89,
    0x4528_21E6_38D0_1377, 0xBE54_66CF_34E9_0C6C,
    0xC0AC_29B7_C97C_50DD, 0x3F84_D5B5_B547_0917,
    0x9216_D5D9_8979_FB1B, 0xD131_0BA6_98DF_B5AC,
    0x2FFD_72DB_D01A_DFB7, 0xB8E1_AFED_6A26_7E96,
    0xBA7C_9045_F12C_7F99, 0x24A1_9947_B391_6CF7,
    0x0801_F2E2_858E_FC16, 0x6369_20D8_7157_4E69,
    0xA458_FEA3_F493_3D7E, 0x0D95_748F_728E_B658,
    0x718B_CD58_8215_4AEE, 0x7B54_A41D_C25A_59B5,
    0x9C30_D539_2AF2_6013, 0xC5D1_B023_2860_85F0,
    0xCA41_7918_B8DB_38EF, 0x8E79_DCB0_603A_180E,
    0x6C9E_0E8B_B01E_8A3E, 0xD715_77C1_BD31_4B27,
    0x78AF_2FDA_5560_5C60, 0xE655_25F3_AA55_AB94,
    0x5748_9862_63E8_1440, 0x55CA_396A_2AAB_10B6,
    0xB4CC_5C34_1141_E8CE, 0xA154_86AF_7C72_E993,
    0xB3EE_1411_636F_BC2A, 0x2BA9_C55D_7418_31F6,
    0xCE5C_3E16_9B87_931E, 0xAFD6_BA33_6C24_CF5C,
    0x7A32_5381_2895_8677, 0x3B8F_4898_6B4B_B9AF,
    0xC4BF_E81B_6628_2193, 0x61D8_09CC_FB21_A991,
    0x487C_AC60_5DEC_8032, 0xEF84_5D5D_E985_75B1,
    0xDC26_2302_EB65_1B88, 0x2389_3E81_D396_ACC5,
    0x0F6D_6FF3_83F4_4239, 0x2E0B_4482_A484_2004,
    0x69C8_F04A_9E1F_9B5E, 0x21C6_6842_F6E9_6C9A,
    0x670C_9C61_ABD3_88F0, 0x6A51_A0D2_D854_2F68,
    0x960F_A728_AB51_33A3, 0x6EEF_0B6C_137A_3BE4,
    0xBA3B_F050_7EFB_2A98, 0xA1F1_651D_39AF_0176,
    0x66CA_593E_8243_0E88, 0x8CEE_8619_456F_9FB4,
    0x7D84_A5C3_3B8B_5EBE, 0xE06F_75D8_85C1_2073,
    0x401A_449F_56C1_6AA6, 0x4ED3_AA62_363F_7706,
    0x1BFE_DF72_429B_023D, 0x37D0_D724_D00A_1248,
    0xDB0F_EAD3_49F1_C09B, 0x0753_72C9_8099_1B7B,
    0x25D4_79D8_F6E8_DEF7, 0xE3FE_501A_B679_4C3B,
    0x976C_E0BD_04C0_06BA, 0xC1A9_4FB6_409F_60C4,
    0x5E5C_9EC2_196A_2463, 0x68FB_6FAF_3E6C_53B5,
    0x1339_B2EB_3B52_EC6F, 0x6DFC_511F_9B30_952C,
    0xCC81_4544_AF5E_BD09, 0xBEE3_D004_DE33_4AFD,
    0x660F_2807_192E_4BB3, 0xC0CB_A857_45C8_740F,
    0xD20B_5F39_B9D3_FBDB, 0x5579_C0BD_1A60_320A,
    0xD6A1_00C6_402C_7279, 0x679F_25FE_FB1F_A3CC,
    0x8EA5_E9F8_DB32_22F8, 0x3C75_16DF_FD61_6B15,
    0x2F50_1EC8_AD05_52AB, 0x323D_B5FA_FD23_8760,
    0x5331_7B48_3E00_DF82, 0x9E5C_57BB_CA6F_8CA0,
    0x1A87_562E_DF17_69DB, 0xD542_A8F6_287E_FFC3,
    0xAC67_32C6_8C4F_5573, 0x695B_27B0_BBCA_58C8,
    0xE1FF_A35D_B8F0_11A0, 0x10FA_3D98_FD21_83B8,
    0x4AFC_B56C_2DD1_D35B, 0x9A53_E479_B6F8_4565,
    0xD28E_49BC_4BFB_9790, 0xE1DD_F2DA_A4CB_7E33,
    0x62FB_1341_CEE4_C6E8, 0xEF20_CADA_3677_4C01,
    0xD07E_9EFE_2BF1_1FB4, 0x95DB_DA4D_AE90_9198,
    0xEAAD_8E71_6B93_D5A0, 0xD08E_D1D0_AFC7_25E0,
    0x8E3C_5B2F_8E75_94B7, 0x8FF6_E2FB_F212_2B64,
    0x8888_B812_900D_F01C, 0x4FAD_5EA0_688F_C31C,
    0xD1CF_F191_B3A8_C1AD, 0x2F2F_2218_BE0E_1777,
    0xEA75_2DFE_8B02_1FA1, 0xE5A0_CC0F_B56F_74E8,
    0x18AC_F3D6_CE89_E299, 0xB4A8_4FE0_FD13_E0B7,
    0x7CC4_3B81_D2AD_A8D9, 0x165F_A266_8095_7705,
    0x93CC_7314_211A_1477, 0xE6AD_2065_77B5_FA86,
    0xC754_42F5_FB9D_35CF, 0xEBCD_AF0C_7B3E_89A0,
    0xD641_1BD3_AE1E_7E49, 0x0025_0E2D_2071_B35E,
    0x2268_00BB_57B8_E0AF, 0x2464_369B_F009_B91E,
    0x5563_911D_59DF_A6AA, 0x78C1_4389_D95A_537F,
    0x207D_5BA2_02E5_B9C5, 0x8326_0376_6295_CFA9,
    0x11C8_1968_4E73_4A41, 0xB347_2DCA_7B14_A94A,
    0x1B51_0052_9A53_2915, 0xD60F_573F_BC9B_C6E4,
    0x2B60_A476_81E6_7400, 0x08BA_6FB5_571B_E91F,
    0xF296_EC6B_2A0D_D915, 0xB663_6521_E7B9_F9B6,
    0xFF34_052E_C585_5664, 0x53B0_2D5D_A99F_8FA1,
    0x08BA_4799_6E85_076A, 0x4B7A_70E9_B5B3_2944,
    0xDB75_092E_C419_2623, 0xAD6E_A6B0_49A7_DF7D,
    0x9CEE_60B8_8FED_B266, 0xECAA_8C71_699A_17FF,
    0x5664_526C_C2B1_9EE1, 0x1936_02A5_7509_4C29,
    0xA059_1340_E418_3A3E, 0x3F54_989A_5B42_9D65,
    0x6B8F_E4D6_99F7_3FD6, 0xA1D2_9C07_EFE8_30F5,
    0x4D2D_38E6_F025_5DC1, 0x4CDD_2086_8470_EB26,
    0x6382_E9C6_021E_CC5E, 0x0968_6B3F_3EBA_EFC9,
    0x3C97_1814_6B6A_70A1, 0x687F_3584_52A0_E286,
    0xB79C_5305_AA50_0737, 0x3E07_841C_7FDE_AE5C,
    0x8E7D_44EC_5716_F2B8, 0xB03A_DA37_F050_0C0D,
    0xF01C_1F04_0200_B3FF, 0xAE0C_F51A_3CB5_74B2,
    0x2583_7A58_DC09_21BD, 0xD191_13F9_7CA9_2FF6,
    0x9432_4773_22F5_4701, 0x3AE5_E581_37C2_DADC,
    0xC8B5_7634_9AF3_DDA7, 0xA944_6146_0FD0_030E,
    0xECC8_C73E_A475_1E41, 0xE238_CD99_3BEA_0E2F,
    0x3280_BBA1_183E_B331, 0x4E54_8B38_4F6D_B908,
    0x6F42_0D03_F60A_04BF, 0x2CB8_1290_2497_7C79,
    0x5679_B072_BCAF_89AF, 0xDE9A_771F_D993_0810,
    0xB38B_AE12_DCCF_3F2E, 0x5512_721F_2E6B_7124,
    0x501A_DDE6_9F84_CD87, 0x7A58_4718_7408_DA17,
    0xBC9F_9ABC_E94B_7D8C, 0xEC7A_EC3A_DB85_1DFA,
    0x6309_4366_C464_C3D2, 0xEF1C_1847_3215_D908,
    0xDD43_3B37_24C2_BA16, 0x12A1_4D43_2A65_C451,
    0x5094_0002_133A_E4DD, 0x71DF_F89E_1031_4E55,
    0x81AC_77D6_5F11_199B, 0x0435_56F1_D7A3_C76B,
    0x3C11_183B_5924_A509, 0xF28F_E6ED_97F1_FBFA,
    0x9EBA_BF2C_1E15_3C6E, 0x86E3_4570_EAE9_6FB1,
    0x860E_5E0A_5A3E_2AB3, 0x771F_E71C_4E3D_06FA,
    0x2965_DCB9_99E7_1D0F, 0x803E_89D6_5266_C825,
    0x2E4C_C978_9C10_B36A, 0xC615_0EBA_94E2_EA78,
    0xA5FC_3C53_1E0A_2DF4, 0xF2F7_4EA7_361D_2B3D,
    0x1939_260F_19C2_7960, 0x5223_A708_F713_12B6,
    0xEBAD_FE6E_EAC3_1F66, 0xE3BC_4595_A67B_C883,
    0xB17F_37D1_018C_FF28, 0xC332_DDEF_BE6C_5AA5,
    0x6558_2185_68AB_9802, 0xEECE_A50F_DB2F_953B,
    0x2AEF_7DAD_5B6E_2F84, 0x1521_B628_2907_6170,
    0xECDD_4775_619F_1510, 0x13CC_A830_EB61_BD96,
    0x0334_FE1E_AA03_63CF, 0xB573_5C90_4C70_A239,
    0xD59E_9E0B_CBAA_DE14, 0xEECC_86BC_6062_2CA7,
    0x9CAB_5CAB_B2F3_846E, 0x648B_1EAF_19BD_F0CA,
    0xA023_69B9_655A_BB50, 0x4068_5A32_3C2A_B4B3,
    0x319E_E9D5_C021_B8F7, 0x9B54_0B19_875F_A099,
    0x95F7_997E_623D_7DA8, 0xF837_889A_97E3_2D77,
    0x11ED_935F_1668_1281, 0x0E35_8829_C7E6_1FD6,
    0x96DE_DFA1_7858_BA99, 0x57F5_84A5_1B22_7263,
    0x9B83_C3FF_1AC2_4696, 0xCDB3_0AEB_532E_3054,
    0x8FD9_48E4_6DBC_3128, 0x58EB_F2EF_34C6_FFEA,
    0xFE28_ED61_EE7C_3C73, 0x5D4A_14D9_E864_B7E3,
    0x4210_5D14_203E_13E0, 0x45EE_E2B6_A3AA_ABEA,
    0xDB6C_4F15_FACB_4FD0, 0xC742_F442_EF6A_BBB5,
    0x654F_3B1D_41CD_2105, 0xD81E_799E_8685_4DC7,
    0xE44B_476A_3D81_6250, 0xCF62_A1F2_5B8D_2646,
    0xFC88_83A0_C1C7_B6A3, 0x7F15_24C3_69CB_7492,
    0x4784_8A0B_5692_B285, 0x095B_BF00_AD19_489D,
    0x1462_B174_2382_0E00, 0x5842_8D2A_0C55_F5EA,
    0x1DAD_F43E_233F_7061, 0x3372_F092_8D93_7E41,
    0xD65F_ECF1_6C22_3BDB, 0x7CDE_3759_CBEE_7460,
    0x4085_F2A7_CE77_326E, 0xA607_8084_19F8_509E,
    0xE8EF_D855_61D9_9735, 0xA969_A7AA_C50C_06C2,
    0x5A04_ABFC_800B_CADC, 0x9E44_7A2E_C345_3484,
    0xFDD5_6705_0E1E_9EC9, 0xDB73_DBD3_1055_88CD,
    0x675F_DA79_E367_4340, 0xC5C4_3465_713E_38D8,
    0x3D28_F89E_F16D_FF20, 0x153E_21E7_8FB0_3D4A,
    0xE6E3_9F2B_DB83_ADF7, 0xE93D_5A68_9481_40F7,
    0xF64C_261C_9469_2934, 0x4115_20F7_7602_D4F7,
    0xBCF4_6B2E_D4A2_0068, 0xD408_2471_3320_F46A,
    0x43B7_D4B7_5000_61AF, 0x1E39_F62E_9724_4546,
];
