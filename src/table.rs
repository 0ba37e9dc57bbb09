//! Fixed-point coordinates of every NeoPixel on the round panel.
//!
//! Generated by `panel-layout`. Regenerate the layout instead of editing this file.
//!
//! Linear values are stored in 0.01 mm units, angles in 0.1 degree units.
//!
//! - id: 0 to 1199 (1200 pixels)
//! - x: -8541 to 8576 (-85.41 mm to 85.76 mm)
//! - y: -8591 to 8527 (-85.91 mm to 85.27 mm)
//! - r: 250 to 8650 (2.50 mm to 86.50 mm)
//! - theta_deg: 2 to 3597 (0.2 deg to 359.7 deg)

use crate::coords::NeoPixelCoord;

/// Number of pixels in [`NEOPIXEL_COORDS`].
pub const NEOPIXEL_COUNT: i16 = 1200;

pub(crate) static NEOPIXEL_COORDS: [NeoPixelCoord; NEOPIXEL_COUNT as usize] = [
    NeoPixelCoord { id: 0, x: 263, y: -343, r: 432, theta_deg: 525 }, // A0
    NeoPixelCoord { id: 1, x: 663, y: -242, r: 706, theta_deg: 201 }, // A1
    NeoPixelCoord { id: 2, x: 764, y: -644, r: 999, theta_deg: 401 }, // A2
    NeoPixelCoord { id: 3, x: 1021, y: -1125, r: 1519, theta_deg: 478 }, // A3
    NeoPixelCoord { id: 4, x: 1190, y: -626, r: 1345, theta_deg: 277 }, // A4
    NeoPixelCoord { id: 5, x: 1134, y: -153, r: 1144, theta_deg: 77 }, // A5
    NeoPixelCoord { id: 6, x: 1451, y: 120, r: 1456, theta_deg: 3553 }, // A6
    NeoPixelCoord { id: 7, x: 1849, y: -95, r: 1852, theta_deg: 29 }, // A7
    NeoPixelCoord { id: 8, x: 1561, y: -428, r: 1618, theta_deg: 153 }, // A8
    NeoPixelCoord { id: 9, x: 1439, y: -1023, r: 1766, theta_deg: 354 }, // A9
    NeoPixelCoord { id: 10, x: 1538, y: -1436, r: 2104, theta_deg: 431 }, // A10
    NeoPixelCoord { id: 11, x: 1825, y: -774, r: 1982, theta_deg: 230 }, // A11
    NeoPixelCoord { id: 12, x: 2140, y: -400, r: 2177, theta_deg: 106 }, // A12
    NeoPixelCoord { id: 13, x: 2355, y: 74, r: 2356, theta_deg: 3582 }, // A13
    NeoPixelCoord { id: 14, x: 2605, y: -267, r: 2619, theta_deg: 59 }, // A14
    NeoPixelCoord { id: 15, x: 2336, y: -770, r: 2459, theta_deg: 183 }, // A15
    NeoPixelCoord { id: 16, x: 1969, y: -1167, r: 2289, theta_deg: 307 }, // A16
    NeoPixelCoord { id: 17, x: 2008, y: -1586, r: 2559, theta_deg: 383 }, // A17
    NeoPixelCoord { id: 18, x: 1517, y: -1854, r: 2395, theta_deg: 507 }, // A18
    NeoPixelCoord { id: 19, x: 1795, y: -2438, r: 3028, theta_deg: 536 }, // A19
    NeoPixelCoord { id: 20, x: 1948, y: -2016, r: 2803, theta_deg: 460 }, // A20
    NeoPixelCoord { id: 21, x: 2453, y: -1628, r: 2944, theta_deg: 336 }, // A21
    NeoPixelCoord { id: 22, x: 2440, y: -1186, r: 2712, theta_deg: 259 }, // A22
    NeoPixelCoord { id: 23, x: 2779, y: -668, r: 2858, theta_deg: 135 }, // A23
    NeoPixelCoord { id: 24, x: 2996, y: -58, r: 2996, theta_deg: 11 }, // A24
    NeoPixelCoord { id: 25, x: 3325, y: 210, r: 3331, theta_deg: 3564 }, // A25
    NeoPixelCoord { id: 26, x: 3170, y: -490, r: 3208, theta_deg: 88 }, // A26
    NeoPixelCoord { id: 27, x: 3266, y: -964, r: 3406, theta_deg: 164 }, // A27
    NeoPixelCoord { id: 28, x: 2871, y: -1112, r: 3079, theta_deg: 212 }, // A28
    NeoPixelCoord { id: 29, x: 2877, y: -1584, r: 3284, theta_deg: 288 }, // A29
    NeoPixelCoord { id: 30, x: 2375, y: -2082, r: 3159, theta_deg: 412 }, // A30
    NeoPixelCoord { id: 31, x: 2208, y: -2532, r: 3359, theta_deg: 489 }, // A31
    NeoPixelCoord { id: 32, x: 2626, y: -2551, r: 3661, theta_deg: 442 }, // A32
    NeoPixelCoord { id: 33, x: 2796, y: -2069, r: 3478, theta_deg: 365 }, // A33
    NeoPixelCoord { id: 34, x: 3206, y: -1985, r: 3770, theta_deg: 318 }, // A34
    NeoPixelCoord { id: 35, x: 3279, y: -1467, r: 3593, theta_deg: 241 }, // A35
    NeoPixelCoord { id: 36, x: 3627, y: -752, r: 3704, theta_deg: 117 }, // A36
    NeoPixelCoord { id: 37, x: 3514, y: -248, r: 3523, theta_deg: 40 }, // A37
    NeoPixelCoord { id: 38, x: 3811, y: 46, r: 3812, theta_deg: 3593 }, // A38
    NeoPixelCoord { id: 39, x: 3950, y: -483, r: 3980, theta_deg: 70 }, // A39
    NeoPixelCoord { id: 40, x: 4007, y: -1046, r: 4141, theta_deg: 146 }, // A40
    NeoPixelCoord { id: 41, x: 3657, y: -1286, r: 3876, theta_deg: 194 }, // A41
    NeoPixelCoord { id: 42, x: 3600, y: -1837, r: 4042, theta_deg: 270 }, // A42
    NeoPixelCoord { id: 43, x: 3043, y: -2503, r: 3940, theta_deg: 394 }, // A43
    NeoPixelCoord { id: 44, x: 2793, y: -3005, r: 4103, theta_deg: 471 }, // A44
    NeoPixelCoord { id: 45, x: 2371, y: -3016, r: 3836, theta_deg: 518 }, // A45
    NeoPixelCoord { id: 46, x: 2458, y: -3479, r: 4260, theta_deg: 548 }, // A46
    NeoPixelCoord { id: 47, x: 2892, y: -3450, r: 4502, theta_deg: 500 }, // A47
    NeoPixelCoord { id: 48, x: 3217, y: -2934, r: 4354, theta_deg: 424 }, // A48
    NeoPixelCoord { id: 49, x: 3454, y: -2391, r: 4201, theta_deg: 347 }, // A49
    NeoPixelCoord { id: 50, x: 3852, y: -2220, r: 4446, theta_deg: 300 }, // A50
    NeoPixelCoord { id: 51, x: 3975, y: -1630, r: 4296, theta_deg: 223 }, // A51
    NeoPixelCoord { id: 52, x: 4325, y: -1369, r: 4536, theta_deg: 176 }, // A52
    NeoPixelCoord { id: 53, x: 4324, y: -755, r: 4389, theta_deg: 99 }, // A53
    NeoPixelCoord { id: 54, x: 4234, y: -165, r: 4238, theta_deg: 22 }, // A54
    NeoPixelCoord { id: 55, x: 4477, y: 195, r: 4481, theta_deg: 3575 }, // A55
    NeoPixelCoord { id: 56, x: 4848, y: -36, r: 4848, theta_deg: 4 }, // A56
    NeoPixelCoord { id: 57, x: 4606, y: -416, r: 4625, theta_deg: 52 }, // A57
    NeoPixelCoord { id: 58, x: 4645, y: -1058, r: 4764, theta_deg: 128 }, // A58
    NeoPixelCoord { id: 59, x: 4590, y: -1715, r: 4900, theta_deg: 205 }, // A59
    NeoPixelCoord { id: 60, x: 4232, y: -1994, r: 4678, theta_deg: 252 }, // A60
    NeoPixelCoord { id: 61, x: 4044, y: -2615, r: 4816, theta_deg: 329 }, // A61
    NeoPixelCoord { id: 62, x: 3636, y: -2803, r: 4591, theta_deg: 376 }, // A62
    NeoPixelCoord { id: 63, x: 3329, y: -3362, r: 4731, theta_deg: 453 }, // A63
    NeoPixelCoord { id: 64, x: 2933, y: -3885, r: 4868, theta_deg: 530 }, // A64
    NeoPixelCoord { id: 65, x: 3386, y: -3788, r: 5081, theta_deg: 482 }, // A65
    NeoPixelCoord { id: 66, x: 3835, y: -3637, r: 5285, theta_deg: 435 }, // A66
    NeoPixelCoord { id: 67, x: 3761, y: -3218, r: 4950, theta_deg: 406 }, // A67
    NeoPixelCoord { id: 68, x: 4184, y: -3019, r: 5160, theta_deg: 358 }, // A68
    NeoPixelCoord { id: 69, x: 4436, y: -2374, r: 5031, theta_deg: 282 }, // A69
    NeoPixelCoord { id: 70, x: 4806, y: -2082, r: 5238, theta_deg: 234 }, // A70
    NeoPixelCoord { id: 71, x: 4919, y: -1388, r: 5111, theta_deg: 158 }, // A71
    NeoPixelCoord { id: 72, x: 5217, y: -1016, r: 5315, theta_deg: 110 }, // A72
    NeoPixelCoord { id: 73, x: 4932, y: -701, r: 4982, theta_deg: 81 }, // A73
    NeoPixelCoord { id: 74, x: 5181, y: -304, r: 5190, theta_deg: 34 }, // A74
    NeoPixelCoord { id: 75, x: 5048, y: 380, r: 5062, theta_deg: 3557 }, // A75
    NeoPixelCoord { id: 76, x: 5389, y: 130, r: 5390, theta_deg: 3586 }, // A76
    NeoPixelCoord { id: 77, x: 5698, y: -154, r: 5700, theta_deg: 15 }, // A77
    NeoPixelCoord { id: 78, x: 5477, y: -603, r: 5510, theta_deg: 63 }, // A78
    NeoPixelCoord { id: 79, x: 5462, y: -1356, r: 5628, theta_deg: 139 }, // A79
    NeoPixelCoord { id: 80, x: 5150, y: -1741, r: 5436, theta_deg: 187 }, // A80
    NeoPixelCoord { id: 81, x: 4979, y: -2465, r: 5556, theta_deg: 263 }, // A81
    NeoPixelCoord { id: 82, x: 4592, y: -2768, r: 5361, theta_deg: 311 }, // A82
    NeoPixelCoord { id: 83, x: 4702, y: -3172, r: 5672, theta_deg: 340 }, // A83
    NeoPixelCoord { id: 84, x: 4276, y: -3431, r: 5482, theta_deg: 387 }, // A84
    NeoPixelCoord { id: 85, x: 3862, y: -4056, r: 5600, theta_deg: 464 }, // A85
    NeoPixelCoord { id: 86, x: 3393, y: -4211, r: 5408, theta_deg: 511 }, // A86
    NeoPixelCoord { id: 87, x: 3354, y: -4628, r: 5716, theta_deg: 541 }, // A87
    NeoPixelCoord { id: 88, x: 3844, y: -4474, r: 5899, theta_deg: 493 }, // A88
    NeoPixelCoord { id: 89, x: 4326, y: -4266, r: 6076, theta_deg: 446 }, // A89
    NeoPixelCoord { id: 90, x: 4322, y: -3847, r: 5786, theta_deg: 417 }, // A90
    NeoPixelCoord { id: 91, x: 4769, y: -3585, r: 5967, theta_deg: 369 }, // A91
    NeoPixelCoord { id: 92, x: 5108, y: -2863, r: 5856, theta_deg: 293 }, // A92
    NeoPixelCoord { id: 93, x: 5490, y: -2506, r: 6034, theta_deg: 245 }, // A93
    NeoPixelCoord { id: 94, x: 5340, y: -2115, r: 5743, theta_deg: 216 }, // A94
    NeoPixelCoord { id: 95, x: 5670, y: -1720, r: 5925, theta_deg: 169 }, // A95
    NeoPixelCoord { id: 96, x: 5738, y: -930, r: 5813, theta_deg: 92 }, // A96
    NeoPixelCoord { id: 97, x: 5975, y: -467, r: 5993, theta_deg: 45 }, // A97
    NeoPixelCoord { id: 98, x: 5874, y: 327, r: 5883, theta_deg: 3568 }, // A98
    NeoPixelCoord { id: 99, x: 6313, y: 552, r: 6337, theta_deg: 3550 }, // A99
    NeoPixelCoord { id: 100, x: 6167, y: 28, r: 6167, theta_deg: 3597 }, // A100
    NeoPixelCoord { id: 101, x: 6432, y: -299, r: 6439, theta_deg: 27 }, // A101
    NeoPixelCoord { id: 102, x: 6220, y: -808, r: 6272, theta_deg: 74 }, // A102
    NeoPixelCoord { id: 103, x: 5965, y: -1283, r: 6101, theta_deg: 121 }, // A103
    NeoPixelCoord { id: 104, x: 6157, y: -1657, r: 6376, theta_deg: 151 }, // A104
    NeoPixelCoord { id: 105, x: 5841, y: -2103, r: 6208, theta_deg: 198 }, // A105
    NeoPixelCoord { id: 106, x: 5601, y: -2911, r: 6312, theta_deg: 275 }, // A106
    NeoPixelCoord { id: 107, x: 5197, y: -3273, r: 6142, theta_deg: 322 }, // A107
    NeoPixelCoord { id: 108, x: 5247, y: -3691, r: 6415, theta_deg: 351 }, // A108
    NeoPixelCoord { id: 109, x: 4796, y: -4004, r: 6248, theta_deg: 399 }, // A109
    NeoPixelCoord { id: 110, x: 4289, y: -4685, r: 6352, theta_deg: 475 }, // A110
    NeoPixelCoord { id: 111, x: 3784, y: -4889, r: 6182, theta_deg: 523 }, // A111
    NeoPixelCoord { id: 112, x: 4213, y: -5101, r: 6616, theta_deg: 505 }, // A112
    NeoPixelCoord { id: 113, x: 4730, y: -4850, r: 6774, theta_deg: 457 }, // A113
    NeoPixelCoord { id: 114, x: 4782, y: -4426, r: 6516, theta_deg: 428 }, // A114
    NeoPixelCoord { id: 115, x: 5258, y: -4115, r: 6677, theta_deg: 381 }, // A115
    NeoPixelCoord { id: 116, x: 5711, y: -3753, r: 6834, theta_deg: 333 }, // A116
    NeoPixelCoord { id: 117, x: 5674, y: -3328, r: 6578, theta_deg: 304 }, // A117
    NeoPixelCoord { id: 118, x: 6073, y: -2917, r: 6737, theta_deg: 257 }, // A118
    NeoPixelCoord { id: 119, x: 5975, y: -2502, r: 6478, theta_deg: 227 }, // A119
    NeoPixelCoord { id: 120, x: 6315, y: -2051, r: 6639, theta_deg: 180 }, // A120
    NeoPixelCoord { id: 121, x: 6616, y: -1558, r: 6797, theta_deg: 133 }, // A121
    NeoPixelCoord { id: 122, x: 6434, y: -1172, r: 6540, theta_deg: 103 }, // A122
    NeoPixelCoord { id: 123, x: 6668, y: -653, r: 6700, theta_deg: 56 }, // A123
    NeoPixelCoord { id: 124, x: 6598, y: 239, r: 6602, theta_deg: 3579 }, // A124
    NeoPixelCoord { id: 125, x: 6993, y: 475, r: 7010, theta_deg: 3561 }, // A125
    NeoPixelCoord { id: 126, x: 6856, y: -102, r: 6857, theta_deg: 9 }, // A126
    NeoPixelCoord { id: 127, x: 7087, y: -468, r: 7102, theta_deg: 38 }, // A127
    NeoPixelCoord { id: 128, x: 6875, y: -1030, r: 6951, theta_deg: 85 }, // A128
    NeoPixelCoord { id: 129, x: 7051, y: -1427, r: 7194, theta_deg: 114 }, // A129
    NeoPixelCoord { id: 130, x: 6766, y: -1963, r: 7045, theta_deg: 162 }, // A130
    NeoPixelCoord { id: 131, x: 6439, y: -2461, r: 6893, theta_deg: 209 }, // A131
    NeoPixelCoord { id: 132, x: 6528, y: -2885, r: 7137, theta_deg: 238 }, // A132
    NeoPixelCoord { id: 133, x: 6136, y: -3343, r: 6987, theta_deg: 286 }, // A133
    NeoPixelCoord { id: 134, x: 5710, y: -4186, r: 7080, theta_deg: 362 }, // A134
    NeoPixelCoord { id: 135, x: 5231, y: -4544, r: 6929, theta_deg: 410 }, // A135
    NeoPixelCoord { id: 136, x: 5167, y: -4974, r: 7172, theta_deg: 439 }, // A136
    NeoPixelCoord { id: 137, x: 4640, y: -5271, r: 7023, theta_deg: 486 }, // A137
    NeoPixelCoord { id: 138, x: 4098, y: -5514, r: 6870, theta_deg: 534 }, // A138
    NeoPixelCoord { id: 139, x: 4353, y: -6102, r: 7495, theta_deg: 545 }, // A139
    NeoPixelCoord { id: 140, x: 4514, y: -5689, r: 7263, theta_deg: 516 }, // A140
    NeoPixelCoord { id: 141, x: 5068, y: -5403, r: 7407, theta_deg: 468 }, // A141
    NeoPixelCoord { id: 142, x: 5602, y: -5061, r: 7549, theta_deg: 421 }, // A142
    NeoPixelCoord { id: 143, x: 5674, y: -4622, r: 7318, theta_deg: 392 }, // A143
    NeoPixelCoord { id: 144, x: 6154, y: -4219, r: 7462, theta_deg: 344 }, // A144
    NeoPixelCoord { id: 145, x: 6163, y: -3778, r: 7228, theta_deg: 315 }, // A145
    NeoPixelCoord { id: 146, x: 6583, y: -3321, r: 7374, theta_deg: 268 }, // A146
    NeoPixelCoord { id: 147, x: 6967, y: -2820, r: 7516, theta_deg: 220 }, // A147
    NeoPixelCoord { id: 148, x: 6883, y: -2384, r: 7284, theta_deg: 191 }, // A148
    NeoPixelCoord { id: 149, x: 7196, y: -1844, r: 7428, theta_deg: 144 }, // A149
    NeoPixelCoord { id: 150, x: 7463, y: -1267, r: 7570, theta_deg: 96 }, // A150
    NeoPixelCoord { id: 151, x: 7290, y: -857, r: 7340, theta_deg: 67 }, // A151
    NeoPixelCoord { id: 152, x: 7478, y: -258, r: 7483, theta_deg: 20 }, // A152
    NeoPixelCoord { id: 153, x: 7249, y: 121, r: 7250, theta_deg: 3590 }, // A153
    NeoPixelCoord { id: 154, x: 7953, y: 636, r: 7979, theta_deg: 3554 }, // A154
    NeoPixelCoord { id: 155, x: 7614, y: 368, r: 7623, theta_deg: 3572 }, // A155
    NeoPixelCoord { id: 156, x: 7845, y: -22, r: 7845, theta_deg: 2 }, // A156
    NeoPixelCoord { id: 157, x: 7680, y: -658, r: 7709, theta_deg: 49 }, // A157
    NeoPixelCoord { id: 158, x: 7854, y: -1080, r: 7928, theta_deg: 78 }, // A158
    NeoPixelCoord { id: 159, x: 7606, y: -1695, r: 7793, theta_deg: 126 }, // A159
    NeoPixelCoord { id: 160, x: 7310, y: -2276, r: 7656, theta_deg: 173 }, // A160
    NeoPixelCoord { id: 161, x: 7391, y: -2723, r: 7877, theta_deg: 202 }, // A161
    NeoPixelCoord { id: 162, x: 7018, y: -3267, r: 7741, theta_deg: 250 }, // A162
    NeoPixelCoord { id: 163, x: 7035, y: -3723, r: 7959, theta_deg: 279 }, // A163
    NeoPixelCoord { id: 164, x: 6604, y: -3766, r: 7603, theta_deg: 297 }, // A164
    NeoPixelCoord { id: 165, x: 6590, y: -4219, r: 7825, theta_deg: 326 }, // A165
    NeoPixelCoord { id: 166, x: 6111, y: -4665, r: 7688, theta_deg: 374 }, // A166
    NeoPixelCoord { id: 167, x: 6032, y: -5114, r: 7908, theta_deg: 403 }, // A167
    NeoPixelCoord { id: 168, x: 5494, y: -5499, r: 7773, theta_deg: 450 }, // A168
    NeoPixelCoord { id: 169, x: 4932, y: -5828, r: 7635, theta_deg: 498 }, // A169
    NeoPixelCoord { id: 170, x: 4763, y: -6249, r: 7857, theta_deg: 527 }, // A170
    NeoPixelCoord { id: 171, x: 5176, y: -6363, r: 8202, theta_deg: 509 }, // A171
    NeoPixelCoord { id: 172, x: 5352, y: -5933, r: 7991, theta_deg: 480 }, // A172
    NeoPixelCoord { id: 173, x: 5772, y: -6007, r: 8331, theta_deg: 461 }, // A173
    NeoPixelCoord { id: 174, x: 5919, y: -5561, r: 8122, theta_deg: 432 }, // A174
    NeoPixelCoord { id: 175, x: 6460, y: -5134, r: 8252, theta_deg: 385 }, // A175
    NeoPixelCoord { id: 176, x: 6542, y: -4675, r: 8041, theta_deg: 356 }, // A176
    NeoPixelCoord { id: 177, x: 7018, y: -4186, r: 8172, theta_deg: 308 }, // A177
    NeoPixelCoord { id: 178, x: 7455, y: -3649, r: 8301, theta_deg: 261 }, // A178
    NeoPixelCoord { id: 179, x: 7440, y: -3181, r: 8091, theta_deg: 232 }, // A179
    NeoPixelCoord { id: 180, x: 7800, y: -2597, r: 8221, theta_deg: 184 }, // A180
    NeoPixelCoord { id: 181, x: 7719, y: -2139, r: 8010, theta_deg: 155 }, // A181
    NeoPixelCoord { id: 182, x: 8112, y: -1975, r: 8349, theta_deg: 137 }, // A182
    NeoPixelCoord { id: 183, x: 7998, y: -1519, r: 8141, theta_deg: 108 }, // A183
    NeoPixelCoord { id: 184, x: 8225, y: -867, r: 8270, theta_deg: 60 }, // A184
    NeoPixelCoord { id: 185, x: 8049, y: -435, r: 8060, theta_deg: 31 }, // A185
    NeoPixelCoord { id: 186, x: 8188, y: 235, r: 8191, theta_deg: 3584 }, // A186
    NeoPixelCoord { id: 187, x: 8507, y: 514, r: 8523, theta_deg: 3565 }, // A187
    NeoPixelCoord { id: 188, x: 8396, y: -188, r: 8398, theta_deg: 13 }, // A188
    NeoPixelCoord { id: 189, x: 8576, y: -631, r: 8599, theta_deg: 42 }, // A189
    NeoPixelCoord { id: 190, x: 8372, y: -1318, r: 8475, theta_deg: 89 }, // A190
    NeoPixelCoord { id: 191, x: 8195, y: -2444, r: 8552, theta_deg: 166 }, // A191
    NeoPixelCoord { id: 192, x: 7849, y: -3067, r: 8427, theta_deg: 213 }, // A192
    NeoPixelCoord { id: 193, x: 7866, y: -3547, r: 8628, theta_deg: 243 }, // A193
    NeoPixelCoord { id: 194, x: 7438, y: -4124, r: 8505, theta_deg: 290 }, // A194
    NeoPixelCoord { id: 195, x: 6968, y: -4654, r: 8379, theta_deg: 337 }, // A195
    NeoPixelCoord { id: 196, x: 6883, y: -5125, r: 8581, theta_deg: 367 }, // A196
    NeoPixelCoord { id: 197, x: 6343, y: -5593, r: 8457, theta_deg: 414 }, // A197
    NeoPixelCoord { id: 198, x: 5591, y: -6447, r: 8534, theta_deg: 491 }, // A198
    NeoPixelCoord { id: 199, x: 4966, y: -6786, r: 8409, theta_deg: 538 }, // A199
    NeoPixelCoord { id: 200, x: -159, y: -591, r: 612, theta_deg: 1050 }, // B0
    NeoPixelCoord { id: 201, x: -50, y: -1087, r: 1088, theta_deg: 926 }, // B1
    NeoPixelCoord { id: 202, x: 248, y: -790, r: 828, theta_deg: 726 }, // B2
    NeoPixelCoord { id: 203, x: 608, y: -1061, r: 1223, theta_deg: 602 }, // B3
    NeoPixelCoord { id: 204, x: 239, y: -1392, r: 1413, theta_deg: 802 }, // B4
    NeoPixelCoord { id: 205, x: -501, y: -1197, r: 1298, theta_deg: 1127 }, // B5
    NeoPixelCoord { id: 206, x: -283, y: -1554, r: 1579, theta_deg: 1003 }, // B6
    NeoPixelCoord { id: 207, x: 66, y: -1817, r: 1818, theta_deg: 879 }, // B7
    NeoPixelCoord { id: 208, x: 632, y: -1551, r: 1675, theta_deg: 678 }, // B8
    NeoPixelCoord { id: 209, x: 1078, y: -1566, r: 1902, theta_deg: 555 }, // B9
    NeoPixelCoord { id: 210, x: 1004, y: -1980, r: 2219, theta_deg: 631 }, // B10
    NeoPixelCoord { id: 211, x: 507, y: -1964, r: 2029, theta_deg: 755 }, // B11
    NeoPixelCoord { id: 212, x: -209, y: -2138, r: 2148, theta_deg: 956 }, // B12
    NeoPixelCoord { id: 213, x: -602, y: -1855, r: 1950, theta_deg: 1080 }, // B13
    NeoPixelCoord { id: 214, x: -557, y: -2369, r: 2434, theta_deg: 1032 }, // B14
    NeoPixelCoord { id: 215, x: -38, y: -2595, r: 2595, theta_deg: 908 }, // B15
    NeoPixelCoord { id: 216, x: 277, y: -2313, r: 2329, theta_deg: 832 }, // B16
    NeoPixelCoord { id: 217, x: 822, y: -2358, r: 2497, theta_deg: 708 }, // B17
    NeoPixelCoord { id: 218, x: 1392, y: -2260, r: 2654, theta_deg: 584 }, // B18
    NeoPixelCoord { id: 219, x: 1174, y: -2641, r: 2891, theta_deg: 660 }, // B19
    NeoPixelCoord { id: 220, x: 550, y: -2691, r: 2747, theta_deg: 784 }, // B20
    NeoPixelCoord { id: 221, x: 202, y: -2969, r: 2976, theta_deg: 861 }, // B21
    NeoPixelCoord { id: 222, x: -419, y: -2805, r: 2836, theta_deg: 985 }, // B22
    NeoPixelCoord { id: 223, x: -959, y: -2512, r: 2689, theta_deg: 1109 }, // B23
    NeoPixelCoord { id: 224, x: -1319, y: -2987, r: 3265, theta_deg: 1138 }, // B24
    NeoPixelCoord { id: 225, x: -851, y: -2937, r: 3058, theta_deg: 1062 }, // B25
    NeoPixelCoord { id: 226, x: -671, y: -3320, r: 3387, theta_deg: 1014 }, // B26
    NeoPixelCoord { id: 227, x: -209, y: -3181, r: 3188, theta_deg: 938 }, // B27
    NeoPixelCoord { id: 228, x: 497, y: -3275, r: 3313, theta_deg: 814 }, // B28
    NeoPixelCoord { id: 229, x: 872, y: -2984, r: 3109, theta_deg: 737 }, // B29
    NeoPixelCoord { id: 230, x: 1554, y: -2839, r: 3237, theta_deg: 613 }, // B30
    NeoPixelCoord { id: 231, x: 1955, y: -2962, r: 3549, theta_deg: 566 }, // B31
    NeoPixelCoord { id: 232, x: 1621, y: -3358, r: 3729, theta_deg: 642 }, // B32
    NeoPixelCoord { id: 233, x: 1232, y: -3204, r: 3433, theta_deg: 690 }, // B33
    NeoPixelCoord { id: 234, x: 837, y: -3520, r: 3619, theta_deg: 766 }, // B34
    NeoPixelCoord { id: 235, x: 377, y: -3776, r: 3795, theta_deg: 843 }, // B35
    NeoPixelCoord { id: 236, x: 59, y: -3504, r: 3505, theta_deg: 890 }, // B36
    NeoPixelCoord { id: 237, x: -430, y: -3662, r: 3687, theta_deg: 967 }, // B37
    NeoPixelCoord { id: 238, x: -1169, y: -3379, r: 3575, theta_deg: 1091 }, // B38
    NeoPixelCoord { id: 239, x: -1510, y: -3733, r: 4026, theta_deg: 1120 }, // B39
    NeoPixelCoord { id: 240, x: -957, y: -3740, r: 3860, theta_deg: 1044 }, // B40
    NeoPixelCoord { id: 241, x: -689, y: -4068, r: 4126, theta_deg: 996 }, // B41
    NeoPixelCoord { id: 242, x: -135, y: -3962, r: 3964, theta_deg: 920 }, // B42
    NeoPixelCoord { id: 243, x: 737, y: -3998, r: 4065, theta_deg: 796 }, // B43
    NeoPixelCoord { id: 244, x: 1212, y: -3707, r: 3901, theta_deg: 719 }, // B44
    NeoPixelCoord { id: 245, x: 1616, y: -3837, r: 4163, theta_deg: 672 }, // B45
    NeoPixelCoord { id: 246, x: 2032, y: -3449, r: 4003, theta_deg: 595 }, // B46
    NeoPixelCoord { id: 247, x: 2042, y: -3910, r: 4411, theta_deg: 624 }, // B47
    NeoPixelCoord { id: 248, x: 1552, y: -4284, r: 4557, theta_deg: 701 }, // B48
    NeoPixelCoord { id: 249, x: 1131, y: -4167, r: 4318, theta_deg: 748 }, // B49
    NeoPixelCoord { id: 250, x: 584, y: -4428, r: 4467, theta_deg: 825 }, // B50
    NeoPixelCoord { id: 251, x: 205, y: -4218, r: 4223, theta_deg: 872 }, // B51
    NeoPixelCoord { id: 252, x: -372, y: -4359, r: 4375, theta_deg: 949 }, // B52
    NeoPixelCoord { id: 253, x: -982, y: -4414, r: 4522, theta_deg: 1025 }, // B53
    NeoPixelCoord { id: 254, x: -1272, y: -4088, r: 4282, theta_deg: 1073 }, // B54
    NeoPixelCoord { id: 255, x: -1612, y: -4378, r: 4665, theta_deg: 1102 }, // B55
    NeoPixelCoord { id: 256, x: -1304, y: -4710, r: 4887, theta_deg: 1055 }, // B56
    NeoPixelCoord { id: 257, x: -646, y: -4707, r: 4751, theta_deg: 978 }, // B57
    NeoPixelCoord { id: 258, x: -12, y: -4611, r: 4611, theta_deg: 901 }, // B58
    NeoPixelCoord { id: 259, x: 387, y: -4820, r: 4835, theta_deg: 854 }, // B59
    NeoPixelCoord { id: 260, x: 997, y: -4591, r: 4698, theta_deg: 777 }, // B60
    NeoPixelCoord { id: 261, x: 1437, y: -4704, r: 4919, theta_deg: 730 }, // B61
    NeoPixelCoord { id: 262, x: 1995, y: -4348, r: 4784, theta_deg: 653 }, // B62
    NeoPixelCoord { id: 263, x: 2483, y: -3925, r: 4645, theta_deg: 577 }, // B63
    NeoPixelCoord { id: 264, x: 2922, y: -4311, r: 5208, theta_deg: 559 }, // B64
    NeoPixelCoord { id: 265, x: 2454, y: -4357, r: 5000, theta_deg: 606 }, // B65
    NeoPixelCoord { id: 266, x: 1899, y: -4765, r: 5130, theta_deg: 683 }, // B66
    NeoPixelCoord { id: 267, x: 1277, y: -5098, r: 5256, theta_deg: 759 }, // B67
    NeoPixelCoord { id: 268, x: 818, y: -4983, r: 5050, theta_deg: 807 }, // B68
    NeoPixelCoord { id: 269, x: 150, y: -5176, r: 5178, theta_deg: 883 }, // B69
    NeoPixelCoord { id: 270, x: -267, y: -4962, r: 4969, theta_deg: 931 }, // B70
    NeoPixelCoord { id: 271, x: -554, y: -5274, r: 5303, theta_deg: 960 }, // B71
    NeoPixelCoord { id: 272, x: -950, y: -5010, r: 5099, theta_deg: 1007 }, // B72
    NeoPixelCoord { id: 273, x: -1650, y: -4959, r: 5226, theta_deg: 1084 }, // B73
    NeoPixelCoord { id: 274, x: -1972, y: -4615, r: 5019, theta_deg: 1131 }, // B74
    NeoPixelCoord { id: 275, x: -2016, y: -5165, r: 5544, theta_deg: 1113 }, // B75
    NeoPixelCoord { id: 276, x: -1282, y: -5271, r: 5425, theta_deg: 1037 }, // B76
    NeoPixelCoord { id: 277, x: -872, y: -5549, r: 5617, theta_deg: 989 }, // B77
    NeoPixelCoord { id: 278, x: -121, y: -5498, r: 5499, theta_deg: 913 }, // B78
    NeoPixelCoord { id: 279, x: 344, y: -5678, r: 5689, theta_deg: 865 }, // B79
    NeoPixelCoord { id: 280, x: 599, y: -5345, r: 5379, theta_deg: 836 }, // B80
    NeoPixelCoord { id: 281, x: 1076, y: -5468, r: 5572, theta_deg: 789 }, // B81
    NeoPixelCoord { id: 282, x: 1757, y: -5163, r: 5454, theta_deg: 712 }, // B82
    NeoPixelCoord { id: 283, x: 2254, y: -5175, r: 5645, theta_deg: 665 }, // B83
    NeoPixelCoord { id: 284, x: 2376, y: -4774, r: 5332, theta_deg: 635 }, // B84
    NeoPixelCoord { id: 285, x: 2863, y: -4728, r: 5527, theta_deg: 588 }, // B85
    NeoPixelCoord { id: 286, x: 3273, y: -5039, r: 6008, theta_deg: 570 }, // B86
    NeoPixelCoord { id: 287, x: 2761, y: -5134, r: 5829, theta_deg: 617 }, // B87
    NeoPixelCoord { id: 288, x: 2091, y: -5561, r: 5941, theta_deg: 694 }, // B88
    NeoPixelCoord { id: 289, x: 1575, y: -5540, r: 5759, theta_deg: 741 }, // B89
    NeoPixelCoord { id: 290, x: 1355, y: -5896, r: 6050, theta_deg: 771 }, // B90
    NeoPixelCoord { id: 291, x: 838, y: -5812, r: 5872, theta_deg: 818 }, // B91
    NeoPixelCoord { id: 292, x: 57, y: -5982, r: 5982, theta_deg: 895 }, // B92
    NeoPixelCoord { id: 293, x: -424, y: -5787, r: 5803, theta_deg: 942 }, // B93
    NeoPixelCoord { id: 294, x: -1215, y: -5788, r: 5914, theta_deg: 1019 }, // B94
    NeoPixelCoord { id: 295, x: -1637, y: -5494, r: 5732, theta_deg: 1066 }, // B95
    NeoPixelCoord { id: 296, x: -2013, y: -5678, r: 6024, theta_deg: 1095 }, // B96
    NeoPixelCoord { id: 297, x: -2401, y: -5329, r: 5845, theta_deg: 1143 }, // B97
    NeoPixelCoord { id: 298, x: -2406, y: -5825, r: 6302, theta_deg: 1124 }, // B98
    NeoPixelCoord { id: 299, x: -1581, y: -5992, r: 6197, theta_deg: 1048 }, // B99
    NeoPixelCoord { id: 300, x: -1111, y: -6269, r: 6366, theta_deg: 1000 }, // B100
    NeoPixelCoord { id: 301, x: -755, y: -6044, r: 6091, theta_deg: 971 }, // B101
    NeoPixelCoord { id: 302, x: -260, y: -6257, r: 6263, theta_deg: 924 }, // B102
    NeoPixelCoord { id: 303, x: 264, y: -6424, r: 6430, theta_deg: 876 }, // B103
    NeoPixelCoord { id: 304, x: 567, y: -6131, r: 6157, theta_deg: 847 }, // B104
    NeoPixelCoord { id: 305, x: 1100, y: -6231, r: 6327, theta_deg: 800 }, // B105
    NeoPixelCoord { id: 306, x: 1890, y: -5929, r: 6223, theta_deg: 723 }, // B106
    NeoPixelCoord { id: 307, x: 2437, y: -5908, r: 6391, theta_deg: 676 }, // B107
    NeoPixelCoord { id: 308, x: 2618, y: -5528, r: 6116, theta_deg: 647 }, // B108
    NeoPixelCoord { id: 309, x: 3151, y: -5441, r: 6287, theta_deg: 599 }, // B109
    NeoPixelCoord { id: 310, x: 3685, y: -5299, r: 6454, theta_deg: 552 }, // B110
    NeoPixelCoord { id: 311, x: 3547, y: -5701, r: 6714, theta_deg: 581 }, // B111
    NeoPixelCoord { id: 312, x: 2991, y: -5832, r: 6554, theta_deg: 628 }, // B112
    NeoPixelCoord { id: 313, x: 2795, y: -6211, r: 6811, theta_deg: 658 }, // B113
    NeoPixelCoord { id: 314, x: 2220, y: -6272, r: 6654, theta_deg: 705 }, // B114
    NeoPixelCoord { id: 315, x: 1653, y: -6278, r: 6492, theta_deg: 752 }, // B115
    NeoPixelCoord { id: 316, x: 1383, y: -6608, r: 6751, theta_deg: 782 }, // B116
    NeoPixelCoord { id: 317, x: 814, y: -6542, r: 6592, theta_deg: 829 }, // B117
    NeoPixelCoord { id: 318, x: -67, y: -6691, r: 6691, theta_deg: 906 }, // B118
    NeoPixelCoord { id: 319, x: -604, y: -6503, r: 6531, theta_deg: 953 }, // B119
    NeoPixelCoord { id: 320, x: -973, y: -6718, r: 6788, theta_deg: 982 }, // B120
    NeoPixelCoord { id: 321, x: -1488, y: -6461, r: 6630, theta_deg: 1030 }, // B121
    NeoPixelCoord { id: 322, x: -1968, y: -6162, r: 6468, theta_deg: 1077 }, // B122
    NeoPixelCoord { id: 323, x: -2371, y: -6296, r: 6728, theta_deg: 1106 }, // B123
    NeoPixelCoord { id: 324, x: -2790, y: -6396, r: 6978, theta_deg: 1136 }, // B124
    NeoPixelCoord { id: 325, x: -2301, y: -6747, r: 7129, theta_deg: 1088 }, // B125
    NeoPixelCoord { id: 326, x: -1886, y: -6620, r: 6884, theta_deg: 1059 }, // B126
    NeoPixelCoord { id: 327, x: -1362, y: -6903, r: 7036, theta_deg: 1012 }, // B127
    NeoPixelCoord { id: 328, x: -804, y: -7140, r: 7185, theta_deg: 964 }, // B128
    NeoPixelCoord { id: 329, x: -424, y: -6930, r: 6942, theta_deg: 935 }, // B129
    NeoPixelCoord { id: 330, x: 153, y: -7092, r: 7094, theta_deg: 888 }, // B130
    NeoPixelCoord { id: 331, x: 497, y: -6829, r: 6848, theta_deg: 858 }, // B131
    NeoPixelCoord { id: 332, x: 1083, y: -6916, r: 7001, theta_deg: 811 }, // B132
    NeoPixelCoord { id: 333, x: 1685, y: -6949, r: 7150, theta_deg: 764 }, // B133
    NeoPixelCoord { id: 334, x: 1969, y: -6620, r: 6906, theta_deg: 734 }, // B134
    NeoPixelCoord { id: 335, x: 2564, y: -6576, r: 7058, theta_deg: 687 }, // B135
    NeoPixelCoord { id: 336, x: 3163, y: -6476, r: 7207, theta_deg: 640 }, // B136
    NeoPixelCoord { id: 337, x: 3372, y: -6094, r: 6965, theta_deg: 610 }, // B137
    NeoPixelCoord { id: 338, x: 3948, y: -5920, r: 7115, theta_deg: 563 }, // B138
    NeoPixelCoord { id: 339, x: 3761, y: -6318, r: 7352, theta_deg: 592 }, // B139
    NeoPixelCoord { id: 340, x: 3541, y: -6704, r: 7582, theta_deg: 622 }, // B140
    NeoPixelCoord { id: 341, x: 2920, y: -6844, r: 7441, theta_deg: 669 }, // B141
    NeoPixelCoord { id: 342, x: 2300, y: -6925, r: 7297, theta_deg: 716 }, // B142
    NeoPixelCoord { id: 343, x: 2005, y: -7257, r: 7528, theta_deg: 746 }, // B143
    NeoPixelCoord { id: 344, x: 1372, y: -7258, r: 7386, theta_deg: 793 }, // B144
    NeoPixelCoord { id: 345, x: 753, y: -7202, r: 7241, theta_deg: 840 }, // B145
    NeoPixelCoord { id: 346, x: 397, y: -7464, r: 7474, theta_deg: 870 }, // B146
    NeoPixelCoord { id: 347, x: -217, y: -7328, r: 7331, theta_deg: 917 }, // B147
    NeoPixelCoord { id: 348, x: -609, y: -7537, r: 7562, theta_deg: 946 }, // B148
    NeoPixelCoord { id: 349, x: -1206, y: -7321, r: 7420, theta_deg: 994 }, // B149
    NeoPixelCoord { id: 350, x: -1771, y: -7057, r: 7276, theta_deg: 1041 }, // B150
    NeoPixelCoord { id: 351, x: -2197, y: -7179, r: 7508, theta_deg: 1070 }, // B151
    NeoPixelCoord { id: 352, x: -2730, y: -6841, r: 7365, theta_deg: 1118 }, // B152
    NeoPixelCoord { id: 353, x: -3171, y: -6901, r: 7594, theta_deg: 1147 }, // B153
    NeoPixelCoord { id: 354, x: -3091, y: -7326, r: 7951, theta_deg: 1129 }, // B154
    NeoPixelCoord { id: 355, x: -2638, y: -7269, r: 7733, theta_deg: 1099 }, // B155
    NeoPixelCoord { id: 356, x: -2064, y: -7593, r: 7869, theta_deg: 1052 }, // B156
    NeoPixelCoord { id: 357, x: -1627, y: -7473, r: 7648, theta_deg: 1023 }, // B157
    NeoPixelCoord { id: 358, x: -1022, y: -7718, r: 7785, theta_deg: 975 }, // B158
    NeoPixelCoord { id: 359, x: -388, y: -7910, r: 7920, theta_deg: 928 }, // B159
    NeoPixelCoord { id: 360, x: 16, y: -7700, r: 7700, theta_deg: 899 }, // B160
    NeoPixelCoord { id: 361, x: 663, y: -7809, r: 7837, theta_deg: 851 }, // B161
    NeoPixelCoord { id: 362, x: 1031, y: -7545, r: 7615, theta_deg: 822 }, // B162
    NeoPixelCoord { id: 363, x: 1328, y: -7860, r: 7971, theta_deg: 804 }, // B163
    NeoPixelCoord { id: 364, x: 1680, y: -7569, r: 7753, theta_deg: 775 }, // B164
    NeoPixelCoord { id: 365, x: 2339, y: -7534, r: 7888, theta_deg: 727 }, // B165
    NeoPixelCoord { id: 366, x: 2645, y: -7197, r: 7668, theta_deg: 698 }, // B166
    NeoPixelCoord { id: 367, x: 3288, y: -7079, r: 7805, theta_deg: 651 }, // B167
    NeoPixelCoord { id: 368, x: 3928, y: -6900, r: 7940, theta_deg: 603 }, // B168
    NeoPixelCoord { id: 369, x: 4157, y: -6506, r: 7721, theta_deg: 574 }, // B169
    NeoPixelCoord { id: 370, x: 4559, y: -6661, r: 8072, theta_deg: 556 }, // B170
    NeoPixelCoord { id: 371, x: 4322, y: -7064, r: 8282, theta_deg: 585 }, // B171
    NeoPixelCoord { id: 372, x: 3666, y: -7282, r: 8153, theta_deg: 633 }, // B172
    NeoPixelCoord { id: 373, x: 3003, y: -7438, r: 8022, theta_deg: 680 }, // B173
    NeoPixelCoord { id: 374, x: 2689, y: -7781, r: 8233, theta_deg: 709 }, // B174
    NeoPixelCoord { id: 375, x: 2005, y: -7851, r: 8103, theta_deg: 757 }, // B175
    NeoPixelCoord { id: 376, x: 1643, y: -8148, r: 8312, theta_deg: 786 }, // B176
    NeoPixelCoord { id: 377, x: 949, y: -8128, r: 8183, theta_deg: 833 }, // B177
    NeoPixelCoord { id: 378, x: 271, y: -8048, r: 8053, theta_deg: 881 }, // B178
    NeoPixelCoord { id: 379, x: -144, y: -8262, r: 8263, theta_deg: 910 }, // B179
    NeoPixelCoord { id: 380, x: -813, y: -8093, r: 8134, theta_deg: 957 }, // B180
    NeoPixelCoord { id: 381, x: -1257, y: -8247, r: 8342, theta_deg: 987 }, // B181
    NeoPixelCoord { id: 382, x: -1455, y: -7869, r: 8002, theta_deg: 1005 }, // B182
    NeoPixelCoord { id: 383, x: -1904, y: -7990, r: 8214, theta_deg: 1034 }, // B183
    NeoPixelCoord { id: 384, x: -2516, y: -7682, r: 8084, theta_deg: 1081 }, // B184
    NeoPixelCoord { id: 385, x: -2981, y: -7739, r: 8293, theta_deg: 1111 }, // B185
    NeoPixelCoord { id: 386, x: -3455, y: -7763, r: 8497, theta_deg: 1140 }, // B186
    NeoPixelCoord { id: 387, x: -2843, y: -8139, r: 8621, theta_deg: 1093 }, // B187
    NeoPixelCoord { id: 388, x: -2367, y: -8080, r: 8420, theta_deg: 1063 }, // B188
    NeoPixelCoord { id: 389, x: -1717, y: -8371, r: 8545, theta_deg: 1016 }, // B189
    NeoPixelCoord { id: 390, x: -580, y: -8448, r: 8468, theta_deg: 939 }, // B190
    NeoPixelCoord { id: 391, x: 121, y: -8591, r: 8592, theta_deg: 892 }, // B191
    NeoPixelCoord { id: 392, x: 546, y: -8372, r: 8390, theta_deg: 863 }, // B192
    NeoPixelCoord { id: 393, x: 1254, y: -8423, r: 8516, theta_deg: 815 }, // B193
    NeoPixelCoord { id: 394, x: 1974, y: -8411, r: 8639, theta_deg: 768 }, // B194
    NeoPixelCoord { id: 395, x: 2345, y: -8106, r: 8438, theta_deg: 739 }, // B195
    NeoPixelCoord { id: 396, x: 3051, y: -8001, r: 8563, theta_deg: 691 }, // B196
    NeoPixelCoord { id: 397, x: 3373, y: -7650, r: 8360, theta_deg: 662 }, // B197
    NeoPixelCoord { id: 398, x: 4054, y: -7456, r: 8486, theta_deg: 615 }, // B198
    NeoPixelCoord { id: 399, x: 4723, y: -7199, r: 8610, theta_deg: 567 }, // B199
    NeoPixelCoord { id: 400, x: -184, y: -169, r: 250, theta_deg: 1375 }, // C0
    NeoPixelCoord { id: 401, x: -692, y: -286, r: 749, theta_deg: 1576 }, // C1
    NeoPixelCoord { id: 402, x: -537, y: -764, r: 934, theta_deg: 1251 }, // C2
    NeoPixelCoord { id: 403, x: -1323, y: -349, r: 1368, theta_deg: 1652 }, // C3
    NeoPixelCoord { id: 404, x: -961, y: -669, r: 1171, theta_deg: 1452 }, // C4
    NeoPixelCoord { id: 405, x: -1003, y: -1084, r: 1477, theta_deg: 1328 }, // C5
    NeoPixelCoord { id: 406, x: -875, y: -1493, r: 1730, theta_deg: 1204 }, // C6
    NeoPixelCoord { id: 407, x: -1441, y: -1190, r: 1869, theta_deg: 1404 }, // C7
    NeoPixelCoord { id: 408, x: -1457, y: -748, r: 1637, theta_deg: 1528 }, // C8
    NeoPixelCoord { id: 409, x: -1770, y: -221, r: 1783, theta_deg: 1729 }, // C9
    NeoPixelCoord { id: 410, x: -1883, y: -667, r: 1998, theta_deg: 1605 }, // C10
    NeoPixelCoord { id: 411, x: -1860, y: -1158, r: 2191, theta_deg: 1481 }, // C11
    NeoPixelCoord { id: 412, x: -1278, y: -1634, r: 2074, theta_deg: 1280 }, // C12
    NeoPixelCoord { id: 413, x: -978, y: -2039, r: 2261, theta_deg: 1156 }, // C13
    NeoPixelCoord { id: 414, x: -1391, y: -2118, r: 2534, theta_deg: 1233 }, // C14
    NeoPixelCoord { id: 415, x: -1695, y: -1655, r: 2369, theta_deg: 1357 }, // C15
    NeoPixelCoord { id: 416, x: -2111, y: -1570, r: 2631, theta_deg: 1434 }, // C16
    NeoPixelCoord { id: 417, x: -2254, y: -1015, r: 2472, theta_deg: 1558 }, // C17
    NeoPixelCoord { id: 418, x: -2253, y: -472, r: 2302, theta_deg: 1682 }, // C18
    NeoPixelCoord { id: 419, x: -2919, y: -458, r: 2955, theta_deg: 1711 }, // C19
    NeoPixelCoord { id: 420, x: -2611, y: -777, r: 2724, theta_deg: 1634 }, // C20
    NeoPixelCoord { id: 421, x: -2510, y: -1390, r: 2869, theta_deg: 1510 }, // C21
    NeoPixelCoord { id: 422, x: -2256, y: -1987, r: 3007, theta_deg: 1386 }, // C22
    NeoPixelCoord { id: 423, x: -1823, y: -2100, r: 2781, theta_deg: 1310 }, // C23
    NeoPixelCoord { id: 424, x: -1397, y: -2567, r: 2923, theta_deg: 1186 }, // C24
    NeoPixelCoord { id: 425, x: -1855, y: -2532, r: 3139, theta_deg: 1262 }, // C25
    NeoPixelCoord { id: 426, x: -2316, y: -2408, r: 3341, theta_deg: 1339 }, // C26
    NeoPixelCoord { id: 427, x: -2676, y: -1786, r: 3217, theta_deg: 1463 }, // C27
    NeoPixelCoord { id: 428, x: -3068, y: -1499, r: 3415, theta_deg: 1540 }, // C28
    NeoPixelCoord { id: 429, x: -2877, y: -1123, r: 3089, theta_deg: 1587 }, // C29
    NeoPixelCoord { id: 430, x: -3201, y: -777, r: 3294, theta_deg: 1664 }, // C30
    NeoPixelCoord { id: 431, x: -3468, y: -364, r: 3487, theta_deg: 1740 }, // C31
    NeoPixelCoord { id: 432, x: -3713, y: -703, r: 3779, theta_deg: 1693 }, // C32
    NeoPixelCoord { id: 433, x: -3417, y: -1136, r: 3601, theta_deg: 1616 }, // C33
    NeoPixelCoord { id: 434, x: -3189, y: -1900, r: 3712, theta_deg: 1492 }, // C34
    NeoPixelCoord { id: 435, x: -2766, y: -2196, r: 3531, theta_deg: 1416 }, // C35
    NeoPixelCoord { id: 436, x: -2301, y: -2826, r: 3644, theta_deg: 1292 }, // C36
    NeoPixelCoord { id: 437, x: -1807, y: -2950, r: 3460, theta_deg: 1215 }, // C37
    NeoPixelCoord { id: 438, x: -1690, y: -3352, r: 3754, theta_deg: 1168 }, // C38
    NeoPixelCoord { id: 439, x: -2218, y: -3237, r: 3924, theta_deg: 1244 }, // C39
    NeoPixelCoord { id: 440, x: -2740, y: -3034, r: 4088, theta_deg: 1321 }, // C40
    NeoPixelCoord { id: 441, x: -2785, y: -2614, r: 3820, theta_deg: 1368 }, // C41
    NeoPixelCoord { id: 442, x: -3245, y: -2317, r: 3987, theta_deg: 1445 }, // C42
    NeoPixelCoord { id: 443, x: -3668, y: -1938, r: 4148, theta_deg: 1521 }, // C43
    NeoPixelCoord { id: 444, x: -3572, y: -1525, r: 3884, theta_deg: 1569 }, // C44
    NeoPixelCoord { id: 445, x: -3903, y: -1079, r: 4050, theta_deg: 1645 }, // C45
    NeoPixelCoord { id: 446, x: -4169, y: -571, r: 4208, theta_deg: 1722 }, // C46
    NeoPixelCoord { id: 447, x: -4347, y: -966, r: 4453, theta_deg: 1675 }, // C47
    NeoPixelCoord { id: 448, x: -4039, y: -1486, r: 4303, theta_deg: 1598 }, // C48
    NeoPixelCoord { id: 449, x: -4120, y: -1915, r: 4543, theta_deg: 1551 }, // C49
    NeoPixelCoord { id: 450, x: -3704, y: -2368, r: 4396, theta_deg: 1474 }, // C50
    NeoPixelCoord { id: 451, x: -3240, y: -2743, r: 4245, theta_deg: 1397 }, // C51
    NeoPixelCoord { id: 452, x: -3174, y: -3173, r: 4488, theta_deg: 1350 }, // C52
    NeoPixelCoord { id: 453, x: -2632, y: -3450, r: 4339, theta_deg: 1273 }, // C53
    NeoPixelCoord { id: 454, x: -2073, y: -3637, r: 4186, theta_deg: 1197 }, // C54
    NeoPixelCoord { id: 455, x: -1869, y: -4018, r: 4432, theta_deg: 1149 }, // C55
    NeoPixelCoord { id: 456, x: -2246, y: -4246, r: 4803, theta_deg: 1179 }, // C56
    NeoPixelCoord { id: 457, x: -2467, y: -3856, r: 4577, theta_deg: 1226 }, // C57
    NeoPixelCoord { id: 458, x: -2870, y: -4018, r: 4938, theta_deg: 1255 }, // C58
    NeoPixelCoord { id: 459, x: -3050, y: -3600, r: 4718, theta_deg: 1303 }, // C59
    NeoPixelCoord { id: 460, x: -3604, y: -3253, r: 4855, theta_deg: 1379 }, // C60
    NeoPixelCoord { id: 461, x: -3683, y: -2808, r: 4631, theta_deg: 1427 }, // C61
    NeoPixelCoord { id: 462, x: -4145, y: -2361, r: 4771, theta_deg: 1503 }, // C62
    NeoPixelCoord { id: 463, x: -4549, y: -1838, r: 4906, theta_deg: 1580 }, // C63
    NeoPixelCoord { id: 464, x: -4474, y: -1391, r: 4685, theta_deg: 1627 }, // C64
    NeoPixelCoord { id: 465, x: -4755, y: -805, r: 4823, theta_deg: 1704 }, // C65
    NeoPixelCoord { id: 466, x: -5131, y: -601, r: 5166, theta_deg: 1733 }, // C66
    NeoPixelCoord { id: 467, x: -4881, y: -1248, r: 5038, theta_deg: 1657 }, // C67
    NeoPixelCoord { id: 468, x: -4956, y: -1714, r: 5244, theta_deg: 1609 }, // C68
    NeoPixelCoord { id: 469, x: -4570, y: -2302, r: 5117, theta_deg: 1533 }, // C69
    NeoPixelCoord { id: 470, x: -4115, y: -2818, r: 4988, theta_deg: 1456 }, // C70
    NeoPixelCoord { id: 471, x: -4030, y: -3280, r: 5196, theta_deg: 1409 }, // C71
    NeoPixelCoord { id: 472, x: -3470, y: -3695, r: 5068, theta_deg: 1332 }, // C72
    NeoPixelCoord { id: 473, x: -3280, y: -4129, r: 5273, theta_deg: 1285 }, // C73
    NeoPixelCoord { id: 474, x: -2636, y: -4422, r: 5148, theta_deg: 1208 }, // C74
    NeoPixelCoord { id: 475, x: -2351, y: -4806, r: 5350, theta_deg: 1161 }, // C75
    NeoPixelCoord { id: 476, x: -2744, y: -4952, r: 5661, theta_deg: 1190 }, // C76
    NeoPixelCoord { id: 477, x: -3038, y: -4550, r: 5471, theta_deg: 1237 }, // C77
    NeoPixelCoord { id: 478, x: -3695, y: -4193, r: 5589, theta_deg: 1314 }, // C78
    NeoPixelCoord { id: 479, x: -3890, y: -3740, r: 5396, theta_deg: 1361 }, // C79
    NeoPixelCoord { id: 480, x: -4451, y: -3259, r: 5516, theta_deg: 1438 }, // C80
    NeoPixelCoord { id: 481, x: -4538, y: -2778, r: 5321, theta_deg: 1485 }, // C81
    NeoPixelCoord { id: 482, x: -4949, y: -2692, r: 5634, theta_deg: 1515 }, // C82
    NeoPixelCoord { id: 483, x: -4979, y: -2197, r: 5442, theta_deg: 1562 }, // C83
    NeoPixelCoord { id: 484, x: -5342, y: -1547, r: 5561, theta_deg: 1639 }, // C84
    NeoPixelCoord { id: 485, x: -5261, y: -1062, r: 5367, theta_deg: 1686 }, // C85
    NeoPixelCoord { id: 486, x: -5616, y: -838, r: 5678, theta_deg: 1715 }, // C86
    NeoPixelCoord { id: 487, x: -5944, y: -579, r: 5972, theta_deg: 1744 }, // C87
    NeoPixelCoord { id: 488, x: -5706, y: -1341, r: 5861, theta_deg: 1668 }, // C88
    NeoPixelCoord { id: 489, x: -5745, y: -1862, r: 6040, theta_deg: 1620 }, // C89
    NeoPixelCoord { id: 490, x: -5371, y: -2049, r: 5749, theta_deg: 1591 }, // C90
    NeoPixelCoord { id: 491, x: -5347, y: -2564, r: 5930, theta_deg: 1544 }, // C91
    NeoPixelCoord { id: 492, x: -4864, y: -3193, r: 5819, theta_deg: 1467 }, // C92
    NeoPixelCoord { id: 493, x: -4725, y: -3694, r: 5998, theta_deg: 1420 }, // C93
    NeoPixelCoord { id: 494, x: -4309, y: -3739, r: 5705, theta_deg: 1391 }, // C94
    NeoPixelCoord { id: 495, x: -4113, y: -4213, r: 5888, theta_deg: 1343 }, // C95
    NeoPixelCoord { id: 496, x: -3865, y: -4675, r: 6065, theta_deg: 1296 }, // C96
    NeoPixelCoord { id: 497, x: -3448, y: -4634, r: 5776, theta_deg: 1267 }, // C97
    NeoPixelCoord { id: 498, x: -3149, y: -5056, r: 5956, theta_deg: 1219 }, // C98
    NeoPixelCoord { id: 499, x: -2801, y: -5455, r: 6132, theta_deg: 1172 }, // C99
    NeoPixelCoord { id: 500, x: -3213, y: -5541, r: 6405, theta_deg: 1201 }, // C100
    NeoPixelCoord { id: 501, x: -3564, y: -5119, r: 6238, theta_deg: 1248 }, // C101
    NeoPixelCoord { id: 502, x: -4285, y: -4675, r: 6342, theta_deg: 1325 }, // C102
    NeoPixelCoord { id: 503, x: -4532, y: -4190, r: 6172, theta_deg: 1372 }, // C103
    NeoPixelCoord { id: 504, x: -4949, y: -4127, r: 6444, theta_deg: 1402 }, // C104
    NeoPixelCoord { id: 505, x: -5136, y: -3609, r: 6277, theta_deg: 1449 }, // C105
    NeoPixelCoord { id: 506, x: -5269, y: -3086, r: 6106, theta_deg: 1496 }, // C106
    NeoPixelCoord { id: 507, x: -5664, y: -2939, r: 6381, theta_deg: 1526 }, // C107
    NeoPixelCoord { id: 508, x: -5732, y: -2397, r: 6213, theta_deg: 1573 }, // C108
    NeoPixelCoord { id: 509, x: -6101, y: -1638, r: 6317, theta_deg: 1650 }, // C109
    NeoPixelCoord { id: 510, x: -6048, y: -1099, r: 6147, theta_deg: 1697 }, // C110
    NeoPixelCoord { id: 511, x: -6367, y: -823, r: 6420, theta_deg: 1726 }, // C111
    NeoPixelCoord { id: 512, x: -6751, y: -1091, r: 6838, theta_deg: 1708 }, // C112
    NeoPixelCoord { id: 513, x: -6437, y: -1380, r: 6583, theta_deg: 1679 }, // C113
    NeoPixelCoord { id: 514, x: -6453, y: -1953, r: 6742, theta_deg: 1632 }, // C114
    NeoPixelCoord { id: 515, x: -6101, y: -2192, r: 6483, theta_deg: 1602 }, // C115
    NeoPixelCoord { id: 516, x: -6046, y: -2756, r: 6644, theta_deg: 1555 }, // C116
    NeoPixelCoord { id: 517, x: -5935, y: -3322, r: 6802, theta_deg: 1508 }, // C117
    NeoPixelCoord { id: 518, x: -5540, y: -3484, r: 6545, theta_deg: 1478 }, // C118
    NeoPixelCoord { id: 519, x: -5362, y: -4026, r: 6705, theta_deg: 1431 }, // C119
    NeoPixelCoord { id: 520, x: -4707, y: -4636, r: 6607, theta_deg: 1354 }, // C120
    NeoPixelCoord { id: 521, x: -4411, y: -5129, r: 6765, theta_deg: 1307 }, // C121
    NeoPixelCoord { id: 522, x: -3985, y: -5143, r: 6507, theta_deg: 1278 }, // C122
    NeoPixelCoord { id: 523, x: -3635, y: -5590, r: 6668, theta_deg: 1230 }, // C123
    NeoPixelCoord { id: 524, x: -3235, y: -6009, r: 6825, theta_deg: 1183 }, // C124
    NeoPixelCoord { id: 525, x: -2815, y: -5935, r: 6569, theta_deg: 1154 }, // C125
    NeoPixelCoord { id: 526, x: -3220, y: -6462, r: 7220, theta_deg: 1165 }, // C126
    NeoPixelCoord { id: 527, x: -3666, y: -6047, r: 7072, theta_deg: 1212 }, // C127
    NeoPixelCoord { id: 528, x: -4064, y: -5601, r: 6920, theta_deg: 1260 }, // C128
    NeoPixelCoord { id: 529, x: -4497, y: -5576, r: 7164, theta_deg: 1289 }, // C129
    NeoPixelCoord { id: 530, x: -4839, y: -5077, r: 7014, theta_deg: 1336 }, // C130
    NeoPixelCoord { id: 531, x: -5128, y: -4559, r: 6861, theta_deg: 1384 }, // C131
    NeoPixelCoord { id: 532, x: -5545, y: -4444, r: 7107, theta_deg: 1413 }, // C132
    NeoPixelCoord { id: 533, x: -5768, y: -3887, r: 6956, theta_deg: 1460 }, // C133
    NeoPixelCoord { id: 534, x: -6167, y: -3713, r: 7198, theta_deg: 1490 }, // C134
    NeoPixelCoord { id: 535, x: -6319, y: -3125, r: 7049, theta_deg: 1537 }, // C135
    NeoPixelCoord { id: 536, x: -6414, y: -2536, r: 6897, theta_deg: 1584 }, // C136
    NeoPixelCoord { id: 537, x: -6767, y: -2284, r: 7142, theta_deg: 1614 }, // C137
    NeoPixelCoord { id: 538, x: -6787, y: -1681, r: 6992, theta_deg: 1661 }, // C138
    NeoPixelCoord { id: 539, x: -7043, y: -771, r: 7085, theta_deg: 1738 }, // C139
    NeoPixelCoord { id: 540, x: -7392, y: -1047, r: 7466, theta_deg: 1719 }, // C140
    NeoPixelCoord { id: 541, x: -7100, y: -1378, r: 7233, theta_deg: 1690 }, // C141
    NeoPixelCoord { id: 542, x: -7102, y: -1999, r: 7378, theta_deg: 1643 }, // C142
    NeoPixelCoord { id: 543, x: -7046, y: -2628, r: 7520, theta_deg: 1595 }, // C143
    NeoPixelCoord { id: 544, x: -6690, y: -2893, r: 7289, theta_deg: 1566 }, // C144
    NeoPixelCoord { id: 545, x: -6555, y: -3503, r: 7433, theta_deg: 1519 }, // C145
    NeoPixelCoord { id: 546, x: -6362, y: -4109, r: 7574, theta_deg: 1471 }, // C146
    NeoPixelCoord { id: 547, x: -5958, y: -4294, r: 7344, theta_deg: 1442 }, // C147
    NeoPixelCoord { id: 548, x: -5691, y: -4864, r: 7487, theta_deg: 1395 }, // C148
    NeoPixelCoord { id: 549, x: -5267, y: -4989, r: 7254, theta_deg: 1366 }, // C149
    NeoPixelCoord { id: 550, x: -4933, y: -5514, r: 7399, theta_deg: 1318 }, // C150
    NeoPixelCoord { id: 551, x: -4547, y: -6016, r: 7541, theta_deg: 1271 }, // C151
    NeoPixelCoord { id: 552, x: -4104, y: -6049, r: 7310, theta_deg: 1242 }, // C152
    NeoPixelCoord { id: 553, x: -3661, y: -6493, r: 7454, theta_deg: 1194 }, // C153
    NeoPixelCoord { id: 554, x: -3623, y: -6927, r: 7817, theta_deg: 1176 }, // C154
    NeoPixelCoord { id: 555, x: -4109, y: -6489, r: 7680, theta_deg: 1223 }, // C155
    NeoPixelCoord { id: 556, x: -4562, y: -6450, r: 7900, theta_deg: 1253 }, // C156
    NeoPixelCoord { id: 557, x: -4992, y: -5948, r: 7765, theta_deg: 1300 }, // C157
    NeoPixelCoord { id: 558, x: -5369, y: -5417, r: 7627, theta_deg: 1347 }, // C158
    NeoPixelCoord { id: 559, x: -5803, y: -5285, r: 7849, theta_deg: 1377 }, // C159
    NeoPixelCoord { id: 560, x: -6111, y: -4705, r: 7713, theta_deg: 1424 }, // C160
    NeoPixelCoord { id: 561, x: -6524, y: -4512, r: 7932, theta_deg: 1453 }, // C161
    NeoPixelCoord { id: 562, x: -6757, y: -3890, r: 7797, theta_deg: 1501 }, // C162
    NeoPixelCoord { id: 563, x: -6931, y: -3261, r: 7660, theta_deg: 1548 }, // C163
    NeoPixelCoord { id: 564, x: -7293, y: -2986, r: 7881, theta_deg: 1577 }, // C164
    NeoPixelCoord { id: 565, x: -7385, y: -2333, r: 7745, theta_deg: 1625 }, // C165
    NeoPixelCoord { id: 566, x: -7706, y: -2008, r: 7963, theta_deg: 1654 }, // C166
    NeoPixelCoord { id: 567, x: -7418, y: -1685, r: 7607, theta_deg: 1672 }, // C167
    NeoPixelCoord { id: 568, x: -7713, y: -1342, r: 7829, theta_deg: 1701 }, // C168
    NeoPixelCoord { id: 569, x: -7986, y: -972, r: 8045, theta_deg: 1731 }, // C169
    NeoPixelCoord { id: 570, x: -8006, y: -1655, r: 8176, theta_deg: 1683 }, // C170
    NeoPixelCoord { id: 571, x: -7966, y: -2346, r: 8304, theta_deg: 1636 }, // C171
    NeoPixelCoord { id: 572, x: -7638, y: -2681, r: 8095, theta_deg: 1607 }, // C172
    NeoPixelCoord { id: 573, x: -7510, y: -3355, r: 8225, theta_deg: 1559 }, // C173
    NeoPixelCoord { id: 574, x: -7140, y: -3639, r: 8014, theta_deg: 1530 }, // C174
    NeoPixelCoord { id: 575, x: -7319, y: -4026, r: 8353, theta_deg: 1512 }, // C175
    NeoPixelCoord { id: 576, x: -6927, y: -4285, r: 8145, theta_deg: 1483 }, // C176
    NeoPixelCoord { id: 577, x: -6653, y: -4919, r: 8274, theta_deg: 1435 }, // C177
    NeoPixelCoord { id: 578, x: -6231, y: -5119, r: 8064, theta_deg: 1406 }, // C178
    NeoPixelCoord { id: 579, x: -5881, y: -5707, r: 8195, theta_deg: 1359 }, // C179
    NeoPixelCoord { id: 580, x: -5438, y: -5844, r: 7983, theta_deg: 1329 }, // C180
    NeoPixelCoord { id: 581, x: -5474, y: -6269, r: 8323, theta_deg: 1311 }, // C181
    NeoPixelCoord { id: 582, x: -5018, y: -6377, r: 8114, theta_deg: 1282 }, // C182
    NeoPixelCoord { id: 583, x: -4546, y: -6878, r: 8244, theta_deg: 1235 }, // C183
    NeoPixelCoord { id: 584, x: -4082, y: -6919, r: 8033, theta_deg: 1205 }, // C184
    NeoPixelCoord { id: 585, x: -3553, y: -7350, r: 8164, theta_deg: 1158 }, // C185
    NeoPixelCoord { id: 586, x: -4024, y: -7341, r: 8372, theta_deg: 1187 }, // C186
    NeoPixelCoord { id: 587, x: -4500, y: -7298, r: 8574, theta_deg: 1217 }, // C187
    NeoPixelCoord { id: 588, x: -5013, y: -6802, r: 8449, theta_deg: 1264 }, // C188
    NeoPixelCoord { id: 589, x: -5481, y: -6692, r: 8650, theta_deg: 1293 }, // C189
    NeoPixelCoord { id: 590, x: -5929, y: -6128, r: 8527, theta_deg: 1341 }, // C190
    NeoPixelCoord { id: 591, x: -6320, y: -5535, r: 8401, theta_deg: 1388 }, // C191
    NeoPixelCoord { id: 592, x: -6753, y: -5330, r: 8603, theta_deg: 1417 }, // C192
    NeoPixelCoord { id: 593, x: -7067, y: -4686, r: 8479, theta_deg: 1465 }, // C193
    NeoPixelCoord { id: 594, x: -7697, y: -3735, r: 8556, theta_deg: 1541 }, // C194
    NeoPixelCoord { id: 595, x: -7863, y: -3042, r: 8431, theta_deg: 1589 }, // C195
    NeoPixelCoord { id: 596, x: -8199, y: -2699, r: 8632, theta_deg: 1618 }, // C196
    NeoPixelCoord { id: 597, x: -8274, y: -1984, r: 8508, theta_deg: 1665 }, // C197
    NeoPixelCoord { id: 598, x: -8285, y: -1275, r: 8383, theta_deg: 1713 }, // C198
    NeoPixelCoord { id: 599, x: -8541, y: -871, r: 8585, theta_deg: 1742 }, // C199
    NeoPixelCoord { id: 600, x: -492, y: 87, r: 499, theta_deg: 1900 }, // D0
    NeoPixelCoord { id: 601, x: -715, y: 857, r: 1117, theta_deg: 2302 }, // D1
    NeoPixelCoord { id: 602, x: -748, y: 434, r: 865, theta_deg: 2101 }, // D2
    NeoPixelCoord { id: 603, x: -1029, y: -43, r: 1030, theta_deg: 1776 }, // D3
    NeoPixelCoord { id: 604, x: -1189, y: 379, r: 1249, theta_deg: 1977 }, // D4
    NeoPixelCoord { id: 605, x: -1134, y: 878, r: 1434, theta_deg: 2178 }, // D5
    NeoPixelCoord { id: 606, x: -1288, y: 1307, r: 1835, theta_deg: 2254 }, // D6
    NeoPixelCoord { id: 607, x: -1530, y: 725, r: 1694, theta_deg: 2054 }, // D7
    NeoPixelCoord { id: 608, x: -1533, y: 142, r: 1539, theta_deg: 1853 }, // D8
    NeoPixelCoord { id: 609, x: -2119, y: 21, r: 2119, theta_deg: 1806 }, // D9
    NeoPixelCoord { id: 610, x: -1869, y: 430, r: 1918, theta_deg: 1930 }, // D10
    NeoPixelCoord { id: 611, x: -2090, y: 787, r: 2233, theta_deg: 2006 }, // D11
    NeoPixelCoord { id: 612, x: -1714, y: 1114, r: 2044, theta_deg: 2130 }, // D12
    NeoPixelCoord { id: 613, x: -1299, y: 1729, r: 2162, theta_deg: 2331 }, // D13
    NeoPixelCoord { id: 614, x: -1733, y: 1948, r: 2607, theta_deg: 2283 }, // D14
    NeoPixelCoord { id: 615, x: -1776, y: 1527, r: 2342, theta_deg: 2207 }, // D15
    NeoPixelCoord { id: 616, x: -2210, y: 1189, r: 2509, theta_deg: 2083 }, // D16
    NeoPixelCoord { id: 617, x: -2383, y: 344, r: 2408, theta_deg: 1882 }, // D17
    NeoPixelCoord { id: 618, x: -2564, y: -187, r: 2571, theta_deg: 1758 }, // D18
    NeoPixelCoord { id: 619, x: -2809, y: 171, r: 2814, theta_deg: 1835 }, // D19
    NeoPixelCoord { id: 620, x: -2980, y: 587, r: 3038, theta_deg: 1911 }, // D20
    NeoPixelCoord { id: 621, x: -2564, y: 730, r: 2666, theta_deg: 1959 }, // D21
    NeoPixelCoord { id: 622, x: -2660, y: 1159, r: 2901, theta_deg: 2035 }, // D22
    NeoPixelCoord { id: 623, x: -2233, y: 1619, r: 2758, theta_deg: 2159 }, // D23
    NeoPixelCoord { id: 624, x: -2162, y: 2060, r: 2986, theta_deg: 2236 }, // D24
    NeoPixelCoord { id: 625, x: -2001, y: 2495, r: 3198, theta_deg: 2313 }, // D25
    NeoPixelCoord { id: 626, x: -2586, y: 2085, r: 3322, theta_deg: 2189 }, // D26
    NeoPixelCoord { id: 627, x: -2667, y: 1616, r: 3119, theta_deg: 2112 }, // D27
    NeoPixelCoord { id: 628, x: -3073, y: 1047, r: 3246, theta_deg: 1988 }, // D28
    NeoPixelCoord { id: 629, x: -3348, y: 376, r: 3369, theta_deg: 1864 }, // D29
    NeoPixelCoord { id: 630, x: -3168, y: -69, r: 3168, theta_deg: 1788 }, // D30
    NeoPixelCoord { id: 631, x: -3668, y: 107, r: 3670, theta_deg: 1817 }, // D31
    NeoPixelCoord { id: 632, x: -3451, y: 865, r: 3558, theta_deg: 1941 }, // D32
    NeoPixelCoord { id: 633, x: -3471, y: 1384, r: 3737, theta_deg: 2017 }, // D33
    NeoPixelCoord { id: 634, x: -3081, y: 1534, r: 3442, theta_deg: 2065 }, // D34
    NeoPixelCoord { id: 635, x: -3002, y: 2036, r: 3627, theta_deg: 2141 }, // D35
    NeoPixelCoord { id: 636, x: -2417, y: 2550, r: 3514, theta_deg: 2265 }, // D36
    NeoPixelCoord { id: 637, x: -2162, y: 2997, r: 3695, theta_deg: 2342 }, // D37
    NeoPixelCoord { id: 638, x: -2581, y: 3019, r: 3972, theta_deg: 2295 }, // D38
    NeoPixelCoord { id: 639, x: -2835, y: 2535, r: 3803, theta_deg: 2218 }, // D39
    NeoPixelCoord { id: 640, x: -3250, y: 2455, r: 4073, theta_deg: 2171 }, // D40
    NeoPixelCoord { id: 641, x: -3405, y: 1919, r: 3908, theta_deg: 2094 }, // D41
    NeoPixelCoord { id: 642, x: -3790, y: 1741, r: 4171, theta_deg: 2047 }, // D42
    NeoPixelCoord { id: 643, x: -3836, y: 1173, r: 4011, theta_deg: 1970 }, // D43
    NeoPixelCoord { id: 644, x: -3793, y: 624, r: 3844, theta_deg: 1893 }, // D44
    NeoPixelCoord { id: 645, x: -4097, y: 330, r: 4111, theta_deg: 1846 }, // D45
    NeoPixelCoord { id: 646, x: -3943, y: -211, r: 3948, theta_deg: 1769 }, // D46
    NeoPixelCoord { id: 647, x: -4361, y: -10, r: 4361, theta_deg: 1799 }, // D47
    NeoPixelCoord { id: 648, x: -4470, y: 591, r: 4509, theta_deg: 1875 }, // D48
    NeoPixelCoord { id: 649, x: -4170, y: 907, r: 4267, theta_deg: 1923 }, // D49
    NeoPixelCoord { id: 650, x: -4153, y: 1506, r: 4418, theta_deg: 1999 }, // D50
    NeoPixelCoord { id: 651, x: -3655, y: 2313, r: 4325, theta_deg: 2123 }, // D51
    NeoPixelCoord { id: 652, x: -3428, y: 2875, r: 4474, theta_deg: 2200 }, // D52
    NeoPixelCoord { id: 653, x: -3005, y: 2977, r: 4230, theta_deg: 2247 }, // D53
    NeoPixelCoord { id: 654, x: -2674, y: 3472, r: 4382, theta_deg: 2324 }, // D54
    NeoPixelCoord { id: 655, x: -3111, y: 3413, r: 4618, theta_deg: 2277 }, // D55
    NeoPixelCoord { id: 656, x: -3546, y: 3297, r: 4842, theta_deg: 2229 }, // D56
    NeoPixelCoord { id: 657, x: -3842, y: 2716, r: 4705, theta_deg: 2153 }, // D57
    NeoPixelCoord { id: 658, x: -4243, y: 2501, r: 4925, theta_deg: 2105 }, // D58
    NeoPixelCoord { id: 659, x: -4044, y: 2114, r: 4564, theta_deg: 2076 }, // D59
    NeoPixelCoord { id: 660, x: -4414, y: 1861, r: 4790, theta_deg: 2029 }, // D60
    NeoPixelCoord { id: 661, x: -4489, y: 1219, r: 4651, theta_deg: 1952 }, // D61
    NeoPixelCoord { id: 662, x: -4793, y: 885, r: 4874, theta_deg: 1905 }, // D62
    NeoPixelCoord { id: 663, x: -4732, y: 231, r: 4738, theta_deg: 1828 }, // D63
    NeoPixelCoord { id: 664, x: -4581, y: -390, r: 4598, theta_deg: 1751 }, // D64
    NeoPixelCoord { id: 665, x: -4954, y: -168, r: 4956, theta_deg: 1781 }, // D65
    NeoPixelCoord { id: 666, x: -5290, y: 91, r: 5291, theta_deg: 1810 }, // D66
    NeoPixelCoord { id: 667, x: -5062, y: 507, r: 5087, theta_deg: 1857 }, // D67
    NeoPixelCoord { id: 668, x: -5072, y: 1207, r: 5214, theta_deg: 1934 }, // D68
    NeoPixelCoord { id: 669, x: -4758, y: 1557, r: 5007, theta_deg: 1981 }, // D69
    NeoPixelCoord { id: 670, x: -4624, y: 2234, r: 5136, theta_deg: 2058 }, // D70
    NeoPixelCoord { id: 671, x: -4390, y: 2900, r: 5262, theta_deg: 2134 }, // D71
    NeoPixelCoord { id: 672, x: -3974, y: 3126, r: 5056, theta_deg: 2182 }, // D72
    NeoPixelCoord { id: 673, x: -3611, y: 3719, r: 5184, theta_deg: 2258 }, // D73
    NeoPixelCoord { id: 674, x: -3159, y: 3844, r: 4975, theta_deg: 2306 }, // D74
    NeoPixelCoord { id: 675, x: -3157, y: 4268, r: 5309, theta_deg: 2335 }, // D75
    NeoPixelCoord { id: 676, x: -3628, y: 4140, r: 5505, theta_deg: 2288 }, // D76
    NeoPixelCoord { id: 677, x: -4093, y: 3958, r: 5694, theta_deg: 2240 }, // D77
    NeoPixelCoord { id: 678, x: -4057, y: 3540, r: 5385, theta_deg: 2211 }, // D78
    NeoPixelCoord { id: 679, x: -4491, y: 3308, r: 5578, theta_deg: 2164 }, // D79
    NeoPixelCoord { id: 680, x: -4788, y: 2623, r: 5459, theta_deg: 2087 }, // D80
    NeoPixelCoord { id: 681, x: -5163, y: 2296, r: 5650, theta_deg: 2040 }, // D81
    NeoPixelCoord { id: 682, x: -4982, y: 1917, r: 5338, theta_deg: 2010 }, // D82
    NeoPixelCoord { id: 683, x: -5310, y: 1554, r: 5533, theta_deg: 1963 }, // D83
    NeoPixelCoord { id: 684, x: -5352, y: 814, r: 5413, theta_deg: 1886 }, // D84
    NeoPixelCoord { id: 685, x: -5593, y: 383, r: 5606, theta_deg: 1839 }, // D85
    NeoPixelCoord { id: 686, x: -5476, y: -359, r: 5488, theta_deg: 1763 }, // D86
    NeoPixelCoord { id: 687, x: -5791, y: -83, r: 5792, theta_deg: 1792 }, // D87
    NeoPixelCoord { id: 688, x: -5862, y: 703, r: 5904, theta_deg: 1868 }, // D88
    NeoPixelCoord { id: 689, x: -5605, y: 1148, r: 5721, theta_deg: 1916 }, // D89
    NeoPixelCoord { id: 690, x: -5822, y: 1506, r: 6014, theta_deg: 1945 }, // D90
    NeoPixelCoord { id: 691, x: -5509, y: 1923, r: 5835, theta_deg: 1992 }, // D91
    NeoPixelCoord { id: 692, x: -5302, y: 2690, r: 5946, theta_deg: 2069 }, // D92
    NeoPixelCoord { id: 693, x: -4908, y: 3024, r: 5765, theta_deg: 2116 }, // D93
    NeoPixelCoord { id: 694, x: -4986, y: 3435, r: 6055, theta_deg: 2146 }, // D94
    NeoPixelCoord { id: 695, x: -4548, y: 3723, r: 5877, theta_deg: 2193 }, // D95
    NeoPixelCoord { id: 696, x: -4086, y: 4377, r: 5988, theta_deg: 2270 }, // D96
    NeoPixelCoord { id: 697, x: -3600, y: 4558, r: 5808, theta_deg: 2317 }, // D97
    NeoPixelCoord { id: 698, x: -3529, y: 4971, r: 6096, theta_deg: 2346 }, // D98
    NeoPixelCoord { id: 699, x: -4038, y: 4794, r: 6268, theta_deg: 2299 }, // D99
    NeoPixelCoord { id: 700, x: -4537, y: 4562, r: 6434, theta_deg: 2252 }, // D100
    NeoPixelCoord { id: 701, x: -4563, y: 4142, r: 6162, theta_deg: 2222 }, // D101
    NeoPixelCoord { id: 702, x: -5024, y: 3854, r: 6332, theta_deg: 2175 }, // D102
    NeoPixelCoord { id: 703, x: -5403, y: 3098, r: 6228, theta_deg: 2098 }, // D103
    NeoPixelCoord { id: 704, x: -5792, y: 2712, r: 6396, theta_deg: 2051 }, // D104
    NeoPixelCoord { id: 705, x: -5669, y: 2310, r: 6122, theta_deg: 2022 }, // D105
    NeoPixelCoord { id: 706, x: -6003, y: 1885, r: 6292, theta_deg: 1974 }, // D106
    NeoPixelCoord { id: 707, x: -6301, y: 1419, r: 6459, theta_deg: 1927 }, // D107
    NeoPixelCoord { id: 708, x: -6098, y: 1050, r: 6187, theta_deg: 1898 }, // D108
    NeoPixelCoord { id: 709, x: -6332, y: 557, r: 6356, theta_deg: 1850 }, // D109
    NeoPixelCoord { id: 710, x: -6077, y: 223, r: 6081, theta_deg: 1821 }, // D110
    NeoPixelCoord { id: 711, x: -6246, y: -287, r: 6253, theta_deg: 1774 }, // D111
    NeoPixelCoord { id: 712, x: -6662, y: -517, r: 6682, theta_deg: 1756 }, // D112
    NeoPixelCoord { id: 713, x: -6521, y: 34, r: 6521, theta_deg: 1803 }, // D113
    NeoPixelCoord { id: 714, x: -6768, y: 381, r: 6779, theta_deg: 1832 }, // D114
    NeoPixelCoord { id: 715, x: -6557, y: 917, r: 6621, theta_deg: 1880 }, // D115
    NeoPixelCoord { id: 716, x: -6471, y: 1809, r: 6719, theta_deg: 1956 }, // D116
    NeoPixelCoord { id: 717, x: -6150, y: 2282, r: 6559, theta_deg: 2004 }, // D117
    NeoPixelCoord { id: 718, x: -6260, y: 2694, r: 6816, theta_deg: 2033 }, // D118
    NeoPixelCoord { id: 719, x: -5878, y: 3128, r: 6658, theta_deg: 2080 }, // D119
    NeoPixelCoord { id: 720, x: -5464, y: 3515, r: 6497, theta_deg: 2128 }, // D120
    NeoPixelCoord { id: 721, x: -5487, y: 3941, r: 6756, theta_deg: 2157 }, // D121
    NeoPixelCoord { id: 722, x: -5023, y: 4277, r: 6597, theta_deg: 2204 }, // D122
    NeoPixelCoord { id: 723, x: -4473, y: 4982, r: 6696, theta_deg: 2281 }, // D123
    NeoPixelCoord { id: 724, x: -3950, y: 5207, r: 6535, theta_deg: 2328 }, // D124
    NeoPixelCoord { id: 725, x: -4232, y: 5812, r: 7190, theta_deg: 2339 }, // D125
    NeoPixelCoord { id: 726, x: -4371, y: 5400, r: 6947, theta_deg: 2310 }, // D126
    NeoPixelCoord { id: 727, x: -4906, y: 5129, r: 7098, theta_deg: 2263 }, // D127
    NeoPixelCoord { id: 728, x: -4983, y: 4703, r: 6852, theta_deg: 2233 }, // D128
    NeoPixelCoord { id: 729, x: -5474, y: 4371, r: 7005, theta_deg: 2186 }, // D129
    NeoPixelCoord { id: 730, x: -5940, y: 3988, r: 7155, theta_deg: 2139 }, // D130
    NeoPixelCoord { id: 731, x: -5927, y: 3554, r: 6911, theta_deg: 2109 }, // D131
    NeoPixelCoord { id: 732, x: -6336, y: 3119, r: 7063, theta_deg: 2062 }, // D132
    NeoPixelCoord { id: 733, x: -6711, y: 2640, r: 7211, theta_deg: 2015 }, // D133
    NeoPixelCoord { id: 734, x: -6607, y: 2217, r: 6969, theta_deg: 1985 }, // D134
    NeoPixelCoord { id: 735, x: -6914, y: 1700, r: 7120, theta_deg: 1938 }, // D135
    NeoPixelCoord { id: 736, x: -6751, y: 1298, r: 6875, theta_deg: 1909 }, // D136
    NeoPixelCoord { id: 737, x: -6987, y: 753, r: 7027, theta_deg: 1861 }, // D137
    NeoPixelCoord { id: 738, x: -7174, y: 177, r: 7177, theta_deg: 1814 }, // D138
    NeoPixelCoord { id: 739, x: -6931, y: -183, r: 6934, theta_deg: 1785 }, // D139
    NeoPixelCoord { id: 740, x: -7310, y: -424, r: 7323, theta_deg: 1767 }, // D140
    NeoPixelCoord { id: 741, x: -7553, y: -52, r: 7553, theta_deg: 1796 }, // D141
    NeoPixelCoord { id: 742, x: -7390, y: 561, r: 7412, theta_deg: 1843 }, // D142
    NeoPixelCoord { id: 743, x: -7176, y: 1146, r: 7267, theta_deg: 1891 }, // D143
    NeoPixelCoord { id: 744, x: -7335, y: 1560, r: 7499, theta_deg: 1920 }, // D144
    NeoPixelCoord { id: 745, x: -7045, y: 2119, r: 7357, theta_deg: 1967 }, // D145
    NeoPixelCoord { id: 746, x: -7144, y: 2553, r: 7586, theta_deg: 1997 }, // D146
    NeoPixelCoord { id: 747, x: -6780, y: 3076, r: 7445, theta_deg: 2044 }, // D147
    NeoPixelCoord { id: 748, x: -6377, y: 3555, r: 7301, theta_deg: 2091 }, // D148
    NeoPixelCoord { id: 749, x: -6383, y: 3999, r: 7533, theta_deg: 2121 }, // D149
    NeoPixelCoord { id: 750, x: -5918, y: 4427, r: 7391, theta_deg: 2168 }, // D150
    NeoPixelCoord { id: 751, x: -5424, y: 4805, r: 7246, theta_deg: 2215 }, // D151
    NeoPixelCoord { id: 752, x: -5337, y: 5239, r: 7479, theta_deg: 2245 }, // D152
    NeoPixelCoord { id: 753, x: -4793, y: 5553, r: 7336, theta_deg: 2292 }, // D153
    NeoPixelCoord { id: 754, x: -4645, y: 5972, r: 7566, theta_deg: 2321 }, // D154
    NeoPixelCoord { id: 755, x: -5060, y: 6098, r: 7924, theta_deg: 2303 }, // D155
    NeoPixelCoord { id: 756, x: -5216, y: 5670, r: 7704, theta_deg: 2274 }, // D156
    NeoPixelCoord { id: 757, x: -5767, y: 5313, r: 7841, theta_deg: 2227 }, // D157
    NeoPixelCoord { id: 758, x: -5860, y: 4870, r: 7619, theta_deg: 2197 }, // D158
    NeoPixelCoord { id: 759, x: -6291, y: 4901, r: 7975, theta_deg: 2179 }, // D159
    NeoPixelCoord { id: 760, x: -6355, y: 4448, r: 7757, theta_deg: 2150 }, // D160
    NeoPixelCoord { id: 761, x: -6817, y: 3977, r: 7892, theta_deg: 2103 }, // D161
    NeoPixelCoord { id: 762, x: -6816, y: 3522, r: 7672, theta_deg: 2073 }, // D162
    NeoPixelCoord { id: 763, x: -7210, y: 3000, r: 7809, theta_deg: 2026 }, // D163
    NeoPixelCoord { id: 764, x: -7561, y: 2436, r: 7944, theta_deg: 1979 }, // D164
    NeoPixelCoord { id: 765, x: -7464, y: 1990, r: 7725, theta_deg: 1949 }, // D165
    NeoPixelCoord { id: 766, x: -7737, y: 1391, r: 7861, theta_deg: 1902 }, // D166
    NeoPixelCoord { id: 767, x: -7578, y: 966, r: 7639, theta_deg: 1873 }, // D167
    NeoPixelCoord { id: 768, x: -7769, y: 343, r: 7777, theta_deg: 1825 }, // D168
    NeoPixelCoord { id: 769, x: -7906, y: -304, r: 7912, theta_deg: 1778 }, // D169
    NeoPixelCoord { id: 770, x: -7662, y: -688, r: 7692, theta_deg: 1749 }, // D170
    NeoPixelCoord { id: 771, x: -8235, y: -578, r: 8255, theta_deg: 1760 }, // D171
    NeoPixelCoord { id: 772, x: -8125, y: 102, r: 8126, theta_deg: 1807 }, // D172
    NeoPixelCoord { id: 773, x: -8317, y: 530, r: 8334, theta_deg: 1836 }, // D173
    NeoPixelCoord { id: 774, x: -7958, y: 760, r: 7994, theta_deg: 1855 }, // D174
    NeoPixelCoord { id: 775, x: -8118, y: 1197, r: 8206, theta_deg: 1884 }, // D175
    NeoPixelCoord { id: 776, x: -7865, y: 1833, r: 8076, theta_deg: 1931 }, // D176
    NeoPixelCoord { id: 777, x: -7963, y: 2290, r: 8286, theta_deg: 1960 }, // D177
    NeoPixelCoord { id: 778, x: -7626, y: 2894, r: 8157, theta_deg: 2008 }, // D178
    NeoPixelCoord { id: 779, x: -7243, y: 3458, r: 8026, theta_deg: 2055 }, // D179
    NeoPixelCoord { id: 780, x: -7242, y: 3923, r: 8236, theta_deg: 2084 }, // D180
    NeoPixelCoord { id: 781, x: -6785, y: 4437, r: 8107, theta_deg: 2132 }, // D181
    NeoPixelCoord { id: 782, x: -6718, y: 4901, r: 8316, theta_deg: 2161 }, // D182
    NeoPixelCoord { id: 783, x: -6193, y: 5355, r: 8187, theta_deg: 2208 }, // D183
    NeoPixelCoord { id: 784, x: -5639, y: 5754, r: 8057, theta_deg: 2256 }, // D184
    NeoPixelCoord { id: 785, x: -5477, y: 6192, r: 8267, theta_deg: 2285 }, // D185
    NeoPixelCoord { id: 786, x: -4869, y: 6520, r: 8137, theta_deg: 2332 }, // D186
    NeoPixelCoord { id: 787, x: -5281, y: 6624, r: 8472, theta_deg: 2314 }, // D187
    NeoPixelCoord { id: 788, x: -5895, y: 6256, r: 8596, theta_deg: 2267 }, // D188
    NeoPixelCoord { id: 789, x: -6061, y: 5807, r: 8394, theta_deg: 2238 }, // D189
    NeoPixelCoord { id: 790, x: -6617, y: 5366, r: 8519, theta_deg: 2190 }, // D190
    NeoPixelCoord { id: 791, x: -7140, y: 4871, r: 8643, theta_deg: 2143 }, // D191
    NeoPixelCoord { id: 792, x: -7208, y: 4395, r: 8442, theta_deg: 2114 }, // D192
    NeoPixelCoord { id: 793, x: -7657, y: 3841, r: 8567, theta_deg: 2066 }, // D193
    NeoPixelCoord { id: 794, x: -7658, y: 3363, r: 8364, theta_deg: 2037 }, // D194
    NeoPixelCoord { id: 795, x: -8029, y: 2761, r: 8490, theta_deg: 1990 }, // D195
    NeoPixelCoord { id: 796, x: -8349, y: 2119, r: 8614, theta_deg: 1942 }, // D196
    NeoPixelCoord { id: 797, x: -8249, y: 1650, r: 8412, theta_deg: 1913 }, // D197
    NeoPixelCoord { id: 798, x: -8481, y: 978, r: 8538, theta_deg: 1866 }, // D198
    NeoPixelCoord { id: 799, x: -8459, y: -160, r: 8461, theta_deg: 1789 }, // D199
    NeoPixelCoord { id: 800, x: 31, y: 352, r: 353, theta_deg: 2750 }, // E0
    NeoPixelCoord { id: 801, x: -305, y: 586, r: 661, theta_deg: 2426 }, // E1
    NeoPixelCoord { id: 802, x: -124, y: 959, r: 967, theta_deg: 2626 }, // E2
    NeoPixelCoord { id: 803, x: 263, y: 1168, r: 1198, theta_deg: 2827 }, // E3
    NeoPixelCoord { id: 804, x: 7, y: 1498, r: 1498, theta_deg: 2703 }, // E4
    NeoPixelCoord { id: 805, x: -447, y: 1243, r: 1321, theta_deg: 2502 }, // E5
    NeoPixelCoord { id: 806, x: -852, y: 1353, r: 1599, theta_deg: 2378 }, // E6
    NeoPixelCoord { id: 807, x: -367, y: 1709, r: 1748, theta_deg: 2579 }, // E7
    NeoPixelCoord { id: 808, x: 261, y: 1867, r: 1885, theta_deg: 2779 }, // E8
    NeoPixelCoord { id: 809, x: 576, y: 1553, r: 1656, theta_deg: 2903 }, // E9
    NeoPixelCoord { id: 810, x: 593, y: 2124, r: 2205, theta_deg: 2856 }, // E10
    NeoPixelCoord { id: 811, x: -162, y: 2083, r: 2089, theta_deg: 2655 }, // E11
    NeoPixelCoord { id: 812, x: -660, y: 2177, r: 2275, theta_deg: 2531 }, // E12
    NeoPixelCoord { id: 813, x: -816, y: 1789, r: 1966, theta_deg: 2455 }, // E13
    NeoPixelCoord { id: 814, x: -1196, y: 2135, r: 2447, theta_deg: 2407 }, // E14
    NeoPixelCoord { id: 815, x: -407, y: 2514, r: 2546, theta_deg: 2608 }, // E15
    NeoPixelCoord { id: 816, x: 133, y: 2378, r: 2382, theta_deg: 2732 }, // E16
    NeoPixelCoord { id: 817, x: 498, y: 2595, r: 2643, theta_deg: 2809 }, // E17
    NeoPixelCoord { id: 818, x: 981, y: 2282, r: 2485, theta_deg: 2933 }, // E18
    NeoPixelCoord { id: 819, x: 915, y: 2730, r: 2880, theta_deg: 2885 }, // E19
    NeoPixelCoord { id: 820, x: 322, y: 3000, r: 3017, theta_deg: 2761 }, // E20
    NeoPixelCoord { id: 821, x: -75, y: 2791, r: 2792, theta_deg: 2685 }, // E21
    NeoPixelCoord { id: 822, x: -706, y: 2847, r: 2933, theta_deg: 2561 }, // E22
    NeoPixelCoord { id: 823, x: -994, y: 2511, r: 2701, theta_deg: 2484 }, // E23
    NeoPixelCoord { id: 824, x: -1592, y: 2361, r: 2847, theta_deg: 2360 }, // E24
    NeoPixelCoord { id: 825, x: -1752, y: 2909, r: 3396, theta_deg: 2389 }, // E25
    NeoPixelCoord { id: 826, x: -1361, y: 2750, r: 3068, theta_deg: 2437 }, // E26
    NeoPixelCoord { id: 827, x: -1048, y: 3103, r: 3275, theta_deg: 2513 }, // E27
    NeoPixelCoord { id: 828, x: -344, y: 3130, r: 3149, theta_deg: 2637 }, // E28
    NeoPixelCoord { id: 829, x: 82, y: 3349, r: 3350, theta_deg: 2714 }, // E29
    NeoPixelCoord { id: 830, x: 770, y: 3134, r: 3227, theta_deg: 2838 }, // E30
    NeoPixelCoord { id: 831, x: 1253, y: 3186, r: 3424, theta_deg: 2915 }, // E31
    NeoPixelCoord { id: 832, x: 1071, y: 3563, r: 3721, theta_deg: 2867 }, // E32
    NeoPixelCoord { id: 833, x: 558, y: 3496, r: 3540, theta_deg: 2791 }, // E33
    NeoPixelCoord { id: 834, x: -213, y: 3647, r: 3653, theta_deg: 2667 }, // E34
    NeoPixelCoord { id: 835, x: -662, y: 3405, r: 3469, theta_deg: 2590 }, // E35
    NeoPixelCoord { id: 836, x: -1020, y: 3621, r: 3762, theta_deg: 2543 }, // E36
    NeoPixelCoord { id: 837, x: -1423, y: 3289, r: 3584, theta_deg: 2466 }, // E37
    NeoPixelCoord { id: 838, x: -2243, y: 3472, r: 4133, theta_deg: 2371 }, // E38
    NeoPixelCoord { id: 839, x: -1824, y: 3411, r: 3868, theta_deg: 2419 }, // E39
    NeoPixelCoord { id: 840, x: -1411, y: 3779, r: 4034, theta_deg: 2495 }, // E40
    NeoPixelCoord { id: 841, x: -552, y: 3893, r: 3932, theta_deg: 2619 }, // E41
    NeoPixelCoord { id: 842, x: -29, y: 4095, r: 4095, theta_deg: 2696 }, // E42
    NeoPixelCoord { id: 843, x: 289, y: 3817, r: 3828, theta_deg: 2743 }, // E43
    NeoPixelCoord { id: 844, x: 830, y: 3908, r: 3995, theta_deg: 2820 }, // E44
    NeoPixelCoord { id: 845, x: 1398, y: 3914, r: 4156, theta_deg: 2897 }, // E45
    NeoPixelCoord { id: 846, x: 1607, y: 3545, r: 3893, theta_deg: 2944 }, // E46
    NeoPixelCoord { id: 847, x: 1747, y: 4201, r: 4550, theta_deg: 2926 }, // E47
    NeoPixelCoord { id: 848, x: 1133, y: 4255, r: 4404, theta_deg: 2849 }, // E48
    NeoPixelCoord { id: 849, x: 537, y: 4218, r: 4252, theta_deg: 2773 }, // E49
    NeoPixelCoord { id: 850, x: 197, y: 4490, r: 4495, theta_deg: 2725 }, // E50
    NeoPixelCoord { id: 851, x: -390, y: 4329, r: 4347, theta_deg: 2649 }, // E51
    NeoPixelCoord { id: 852, x: -930, y: 4089, r: 4193, theta_deg: 2572 }, // E52
    NeoPixelCoord { id: 853, x: -1338, y: 4232, r: 4439, theta_deg: 2525 }, // E53
    NeoPixelCoord { id: 854, x: -1827, y: 3880, r: 4289, theta_deg: 2448 }, // E54
    NeoPixelCoord { id: 855, x: -2261, y: 3925, r: 4529, theta_deg: 2401 }, // E55
    NeoPixelCoord { id: 856, x: -2707, y: 3912, r: 4758, theta_deg: 2353 }, // E56
    NeoPixelCoord { id: 857, x: -2223, y: 4359, r: 4893, theta_deg: 2430 }, // E57
    NeoPixelCoord { id: 858, x: -1771, y: 4323, r: 4672, theta_deg: 2477 }, // E58
    NeoPixelCoord { id: 859, x: -1214, y: 4654, r: 4810, theta_deg: 2554 }, // E59
    NeoPixelCoord { id: 860, x: -787, y: 4516, r: 4584, theta_deg: 2601 }, // E60
    NeoPixelCoord { id: 861, x: -183, y: 4721, r: 4725, theta_deg: 2678 }, // E61
    NeoPixelCoord { id: 862, x: 461, y: 4839, r: 4861, theta_deg: 2754 }, // E62
    NeoPixelCoord { id: 863, x: 820, y: 4565, r: 4638, theta_deg: 2802 }, // E63
    NeoPixelCoord { id: 864, x: 1464, y: 4547, r: 4777, theta_deg: 2878 }, // E64
    NeoPixelCoord { id: 865, x: 1817, y: 4791, r: 5123, theta_deg: 2908 }, // E65
    NeoPixelCoord { id: 866, x: 1132, y: 4864, r: 4994, theta_deg: 2831 }, // E66
    NeoPixelCoord { id: 867, x: 757, y: 5147, r: 5202, theta_deg: 2784 }, // E67
    NeoPixelCoord { id: 868, x: 63, y: 5074, r: 5075, theta_deg: 2707 }, // E68
    NeoPixelCoord { id: 869, x: -371, y: 5266, r: 5279, theta_deg: 2660 }, // E69
    NeoPixelCoord { id: 870, x: -599, y: 4907, r: 4944, theta_deg: 2630 }, // E70
    NeoPixelCoord { id: 871, x: -1044, y: 5047, r: 5154, theta_deg: 2583 }, // E71
    NeoPixelCoord { id: 872, x: -1665, y: 4741, r: 5025, theta_deg: 2506 }, // E72
    NeoPixelCoord { id: 873, x: -2136, y: 4776, r: 5232, theta_deg: 2459 }, // E73
    NeoPixelCoord { id: 874, x: -2687, y: 4341, r: 5105, theta_deg: 2382 }, // E74
    NeoPixelCoord { id: 875, x: -3108, y: 4685, r: 5622, theta_deg: 2364 }, // E75
    NeoPixelCoord { id: 876, x: -2619, y: 4758, r: 5431, theta_deg: 2412 }, // E76
    NeoPixelCoord { id: 877, x: -2004, y: 5176, r: 5550, theta_deg: 2488 }, // E77
    NeoPixelCoord { id: 878, x: -1515, y: 5137, r: 5356, theta_deg: 2536 }, // E78
    NeoPixelCoord { id: 879, x: -1323, y: 5510, r: 5667, theta_deg: 2565 }, // E79
    NeoPixelCoord { id: 880, x: -835, y: 5412, r: 5476, theta_deg: 2612 }, // E80
    NeoPixelCoord { id: 881, x: -108, y: 5594, r: 5595, theta_deg: 2689 }, // E81
    NeoPixelCoord { id: 882, x: 342, y: 5391, r: 5402, theta_deg: 2736 }, // E82
    NeoPixelCoord { id: 883, x: 1082, y: 5415, r: 5522, theta_deg: 2813 }, // E83
    NeoPixelCoord { id: 884, x: 1471, y: 5119, r: 5326, theta_deg: 2860 }, // E84
    NeoPixelCoord { id: 885, x: 1832, y: 5333, r: 5639, theta_deg: 2890 }, // E85
    NeoPixelCoord { id: 886, x: 2189, y: 4989, r: 5448, theta_deg: 2937 }, // E86
    NeoPixelCoord { id: 887, x: 2213, y: 5508, r: 5935, theta_deg: 2919 }, // E87
    NeoPixelCoord { id: 888, x: 1431, y: 5646, r: 5824, theta_deg: 2842 }, // E88
    NeoPixelCoord { id: 889, x: 990, y: 5921, r: 6003, theta_deg: 2795 }, // E89
    NeoPixelCoord { id: 890, x: 652, y: 5673, r: 5711, theta_deg: 2766 }, // E90
    NeoPixelCoord { id: 891, x: 188, y: 5890, r: 5893, theta_deg: 2718 }, // E91
    NeoPixelCoord { id: 892, x: -308, y: 6063, r: 6070, theta_deg: 2671 }, // E92
    NeoPixelCoord { id: 893, x: -588, y: 5751, r: 5781, theta_deg: 2642 }, // E93
    NeoPixelCoord { id: 894, x: -1094, y: 5860, r: 5962, theta_deg: 2594 }, // E94
    NeoPixelCoord { id: 895, x: -1831, y: 5557, r: 5851, theta_deg: 2518 }, // E95
    NeoPixelCoord { id: 896, x: -2353, y: 5551, r: 6029, theta_deg: 2470 }, // E96
    NeoPixelCoord { id: 897, x: -2506, y: 5161, r: 5738, theta_deg: 2441 }, // E97
    NeoPixelCoord { id: 898, x: -3017, y: 5093, r: 5920, theta_deg: 2394 }, // E98
    NeoPixelCoord { id: 899, x: -3418, y: 5377, r: 6371, theta_deg: 2376 }, // E99
    NeoPixelCoord { id: 900, x: -2884, y: 5491, r: 6203, theta_deg: 2423 }, // E100
    NeoPixelCoord { id: 901, x: -2162, y: 5925, r: 6307, theta_deg: 2500 }, // E101
    NeoPixelCoord { id: 902, x: -1620, y: 5919, r: 6137, theta_deg: 2547 }, // E102
    NeoPixelCoord { id: 903, x: -1375, y: 6261, r: 6410, theta_deg: 2576 }, // E103
    NeoPixelCoord { id: 904, x: -831, y: 6187, r: 6243, theta_deg: 2624 }, // E104
    NeoPixelCoord { id: 905, x: 2, y: 6347, r: 6347, theta_deg: 2700 }, // E105
    NeoPixelCoord { id: 906, x: 512, y: 6156, r: 6177, theta_deg: 2748 }, // E106
    NeoPixelCoord { id: 907, x: 862, y: 6391, r: 6449, theta_deg: 2777 }, // E107
    NeoPixelCoord { id: 908, x: 1351, y: 6136, r: 6282, theta_deg: 2824 }, // E108
    NeoPixelCoord { id: 909, x: 1802, y: 5840, r: 6111, theta_deg: 2872 }, // E109
    NeoPixelCoord { id: 910, x: 2192, y: 5998, r: 6386, theta_deg: 2901 }, // E110
    NeoPixelCoord { id: 911, x: 2609, y: 5644, r: 6218, theta_deg: 2948 }, // E111
    NeoPixelCoord { id: 912, x: 2598, y: 6120, r: 6649, theta_deg: 2930 }, // E112
    NeoPixelCoord { id: 913, x: 2134, y: 6463, r: 6806, theta_deg: 2883 }, // E113
    NeoPixelCoord { id: 914, x: 1733, y: 6316, r: 6550, theta_deg: 2853 }, // E114
    NeoPixelCoord { id: 915, x: 1235, y: 6595, r: 6710, theta_deg: 2806 }, // E115
    NeoPixelCoord { id: 916, x: 339, y: 6603, r: 6611, theta_deg: 2729 }, // E116
    NeoPixelCoord { id: 917, x: -212, y: 6766, r: 6770, theta_deg: 2682 }, // E117
    NeoPixelCoord { id: 918, x: -536, y: 6489, r: 6511, theta_deg: 2653 }, // E118
    NeoPixelCoord { id: 919, x: -1096, y: 6582, r: 6672, theta_deg: 2605 }, // E119
    NeoPixelCoord { id: 920, x: -1674, y: 6621, r: 6829, theta_deg: 2558 }, // E120
    NeoPixelCoord { id: 921, x: -1935, y: 6282, r: 6573, theta_deg: 2529 }, // E121
    NeoPixelCoord { id: 922, x: -2506, y: 6249, r: 6733, theta_deg: 2481 }, // E122
    NeoPixelCoord { id: 923, x: -2713, y: 5877, r: 6473, theta_deg: 2452 }, // E123
    NeoPixelCoord { id: 924, x: -3269, y: 5774, r: 6635, theta_deg: 2405 }, // E124
    NeoPixelCoord { id: 925, x: -3823, y: 5614, r: 6793, theta_deg: 2357 }, // E125
    NeoPixelCoord { id: 926, x: -3661, y: 6014, r: 7041, theta_deg: 2387 }, // E126
    NeoPixelCoord { id: 927, x: -3083, y: 6160, r: 6888, theta_deg: 2434 }, // E127
    NeoPixelCoord { id: 928, x: -2863, y: 6533, r: 7133, theta_deg: 2463 }, // E128
    NeoPixelCoord { id: 929, x: -2265, y: 6605, r: 6983, theta_deg: 2511 }, // E129
    NeoPixelCoord { id: 930, x: -1382, y: 6940, r: 7076, theta_deg: 2587 }, // E130
    NeoPixelCoord { id: 931, x: -787, y: 6880, r: 6925, theta_deg: 2635 }, // E131
    NeoPixelCoord { id: 932, x: -450, y: 7154, r: 7168, theta_deg: 2664 }, // E132
    NeoPixelCoord { id: 933, x: 139, y: 7017, r: 7018, theta_deg: 2711 }, // E133
    NeoPixelCoord { id: 934, x: 702, y: 6830, r: 6866, theta_deg: 2759 }, // E134
    NeoPixelCoord { id: 935, x: 1087, y: 7027, r: 7111, theta_deg: 2788 }, // E135
    NeoPixelCoord { id: 936, x: 1629, y: 6767, r: 6960, theta_deg: 2835 }, // E136
    NeoPixelCoord { id: 937, x: 2041, y: 6907, r: 7203, theta_deg: 2865 }, // E137
    NeoPixelCoord { id: 938, x: 2550, y: 6577, r: 7054, theta_deg: 2912 }, // E138
    NeoPixelCoord { id: 939, x: 2981, y: 6656, r: 7293, theta_deg: 2941 }, // E139
    NeoPixelCoord { id: 940, x: 2469, y: 7015, r: 7437, theta_deg: 2894 }, // E140
    NeoPixelCoord { id: 941, x: 1917, y: 7332, r: 7578, theta_deg: 2847 }, // E141
    NeoPixelCoord { id: 942, x: 1493, y: 7195, r: 7348, theta_deg: 2817 }, // E142
    NeoPixelCoord { id: 943, x: 911, y: 7435, r: 7491, theta_deg: 2770 }, // E143
    NeoPixelCoord { id: 944, x: 514, y: 7240, r: 7259, theta_deg: 2741 }, // E144
    NeoPixelCoord { id: 945, x: -87, y: 7403, r: 7403, theta_deg: 2693 }, // E145
    NeoPixelCoord { id: 946, x: -712, y: 7511, r: 7545, theta_deg: 2646 }, // E146
    NeoPixelCoord { id: 947, x: -1061, y: 7237, r: 7314, theta_deg: 2617 }, // E147
    NeoPixelCoord { id: 948, x: -1687, y: 7264, r: 7458, theta_deg: 2569 }, // E148
    NeoPixelCoord { id: 949, x: -1991, y: 6944, r: 7224, theta_deg: 2540 }, // E149
    NeoPixelCoord { id: 950, x: -2324, y: 7234, r: 7599, theta_deg: 2522 }, // E150
    NeoPixelCoord { id: 951, x: -2609, y: 6892, r: 7369, theta_deg: 2493 }, // E151
    NeoPixelCoord { id: 952, x: -3231, y: 6782, r: 7512, theta_deg: 2445 }, // E152
    NeoPixelCoord { id: 953, x: -3463, y: 6404, r: 7280, theta_deg: 2416 }, // E153
    NeoPixelCoord { id: 954, x: -4058, y: 6217, r: 7424, theta_deg: 2369 }, // E154
    NeoPixelCoord { id: 955, x: -4462, y: 6385, r: 7789, theta_deg: 2351 }, // E155
    NeoPixelCoord { id: 956, x: -3850, y: 6613, r: 7652, theta_deg: 2398 }, // E156
    NeoPixelCoord { id: 957, x: -3609, y: 6997, r: 7873, theta_deg: 2427 }, // E157
    NeoPixelCoord { id: 958, x: -2967, y: 7145, r: 7737, theta_deg: 2475 }, // E158
    NeoPixelCoord { id: 959, x: -2671, y: 7493, r: 7955, theta_deg: 2504 }, // E159
    NeoPixelCoord { id: 960, x: -2009, y: 7559, r: 7821, theta_deg: 2551 }, // E160
    NeoPixelCoord { id: 961, x: -1354, y: 7564, r: 7684, theta_deg: 2599 }, // E161
    NeoPixelCoord { id: 962, x: -993, y: 7842, r: 7904, theta_deg: 2628 }, // E162
    NeoPixelCoord { id: 963, x: -337, y: 7762, r: 7769, theta_deg: 2675 }, // E163
    NeoPixelCoord { id: 964, x: 300, y: 7625, r: 7631, theta_deg: 2723 }, // E164
    NeoPixelCoord { id: 965, x: 709, y: 7821, r: 7853, theta_deg: 2752 }, // E165
    NeoPixelCoord { id: 966, x: 1329, y: 7601, r: 7717, theta_deg: 2799 }, // E166
    NeoPixelCoord { id: 967, x: 1764, y: 7737, r: 7936, theta_deg: 2828 }, // E167
    NeoPixelCoord { id: 968, x: 2356, y: 7437, r: 7801, theta_deg: 2876 }, // E168
    NeoPixelCoord { id: 969, x: 2910, y: 7090, r: 7664, theta_deg: 2923 }, // E169
    NeoPixelCoord { id: 970, x: 3272, y: 7550, r: 8229, theta_deg: 2934 }, // E170
    NeoPixelCoord { id: 971, x: 2809, y: 7510, r: 8018, theta_deg: 2905 }, // E171
    NeoPixelCoord { id: 972, x: 2679, y: 7916, r: 8357, theta_deg: 2887 }, // E172
    NeoPixelCoord { id: 973, x: 2215, y: 7842, r: 8149, theta_deg: 2858 }, // E173
    NeoPixelCoord { id: 974, x: 1584, y: 8125, r: 8278, theta_deg: 2810 }, // E174
    NeoPixelCoord { id: 975, x: 1138, y: 7988, r: 8068, theta_deg: 2781 }, // E175
    NeoPixelCoord { id: 976, x: 482, y: 8184, r: 8199, theta_deg: 2734 }, // E176
    NeoPixelCoord { id: 977, x: 62, y: 7986, r: 7987, theta_deg: 2704 }, // E177
    NeoPixelCoord { id: 978, x: -199, y: 8324, r: 8327, theta_deg: 2686 }, // E178
    NeoPixelCoord { id: 979, x: -608, y: 8095, r: 8118, theta_deg: 2657 }, // E179
    NeoPixelCoord { id: 980, x: -1294, y: 8146, r: 8248, theta_deg: 2610 }, // E180
    NeoPixelCoord { id: 981, x: -1665, y: 7863, r: 8037, theta_deg: 2580 }, // E181
    NeoPixelCoord { id: 982, x: -2346, y: 7824, r: 8168, theta_deg: 2533 }, // E182
    NeoPixelCoord { id: 983, x: -3031, y: 7723, r: 8297, theta_deg: 2486 }, // E183
    NeoPixelCoord { id: 984, x: -3335, y: 7368, r: 8087, theta_deg: 2456 }, // E184
    NeoPixelCoord { id: 985, x: -3995, y: 7181, r: 8218, theta_deg: 2409 }, // E185
    NeoPixelCoord { id: 986, x: -4245, y: 6788, r: 8006, theta_deg: 2380 }, // E186
    NeoPixelCoord { id: 987, x: -4646, y: 6933, r: 8345, theta_deg: 2362 }, // E187
    NeoPixelCoord { id: 988, x: -4390, y: 7335, r: 8548, theta_deg: 2391 }, // E188
    NeoPixelCoord { id: 989, x: -3714, y: 7560, r: 8424, theta_deg: 2438 }, // E189
    NeoPixelCoord { id: 990, x: -3403, y: 7925, r: 8625, theta_deg: 2468 }, // E190
    NeoPixelCoord { id: 991, x: -2698, y: 8062, r: 8501, theta_deg: 2515 }, // E191
    NeoPixelCoord { id: 992, x: -1993, y: 8135, r: 8375, theta_deg: 2562 }, // E192
    NeoPixelCoord { id: 993, x: -1613, y: 8425, r: 8578, theta_deg: 2592 }, // E193
    NeoPixelCoord { id: 994, x: -899, y: 8405, r: 8453, theta_deg: 2639 }, // E194
    NeoPixelCoord { id: 995, x: 232, y: 8527, r: 8530, theta_deg: 2716 }, // E195
    NeoPixelCoord { id: 996, x: 922, y: 8354, r: 8405, theta_deg: 2763 }, // E196
    NeoPixelCoord { id: 997, x: 1380, y: 8495, r: 8607, theta_deg: 2792 }, // E197
    NeoPixelCoord { id: 998, x: 2046, y: 8232, r: 8483, theta_deg: 2840 }, // E198
    NeoPixelCoord { id: 999, x: 3154, y: 7957, r: 8559, theta_deg: 2916 }, // E199
    NeoPixelCoord { id: 1000, x: 471, y: 300, r: 558, theta_deg: 3275 }, // F0
    NeoPixelCoord { id: 1001, x: 879, y: 193, r: 900, theta_deg: 3476 }, // F1
    NeoPixelCoord { id: 1002, x: 751, y: 747, r: 1059, theta_deg: 3151 }, // F2
    NeoPixelCoord { id: 1003, x: 335, y: 715, r: 790, theta_deg: 2951 }, // F3
    NeoPixelCoord { id: 1004, x: 752, y: 1169, r: 1390, theta_deg: 3027 }, // F4
    NeoPixelCoord { id: 1005, x: 1156, y: 534, r: 1273, theta_deg: 3352 }, // F5
    NeoPixelCoord { id: 1006, x: 1636, y: 504, r: 1712, theta_deg: 3429 }, // F6
    NeoPixelCoord { id: 1007, x: 1242, y: 943, r: 1559, theta_deg: 3228 }, // F7
    NeoPixelCoord { id: 1008, x: 1167, y: 1371, r: 1801, theta_deg: 3104 }, // F8
    NeoPixelCoord { id: 1009, x: 945, y: 1777, r: 2013, theta_deg: 2980 }, // F9
    NeoPixelCoord { id: 1010, x: 1587, y: 1426, r: 2133, theta_deg: 3181 }, // F10
    NeoPixelCoord { id: 1011, x: 1683, y: 953, r: 1934, theta_deg: 3305 }, // F11
    NeoPixelCoord { id: 1012, x: 2086, y: 837, r: 2247, theta_deg: 3381 }, // F12
    NeoPixelCoord { id: 1013, x: 2031, y: 339, r: 2059, theta_deg: 3505 }, // F13
    NeoPixelCoord { id: 1014, x: 2445, y: 619, r: 2522, theta_deg: 3458 }, // F14
    NeoPixelCoord { id: 1015, x: 2001, y: 1363, r: 2421, theta_deg: 3257 }, // F15
    NeoPixelCoord { id: 1016, x: 1772, y: 1879, r: 2583, theta_deg: 3133 }, // F16
    NeoPixelCoord { id: 1017, x: 1350, y: 1881, r: 2316, theta_deg: 3057 }, // F17
    NeoPixelCoord { id: 1018, x: 1406, y: 2346, r: 2735, theta_deg: 3009 }, // F18
    NeoPixelCoord { id: 1019, x: 1850, y: 2317, r: 2965, theta_deg: 3086 }, // F19
    NeoPixelCoord { id: 1020, x: 2195, y: 1778, r: 2825, theta_deg: 3210 }, // F20
    NeoPixelCoord { id: 1021, x: 2394, y: 1199, r: 2678, theta_deg: 3334 }, // F21
    NeoPixelCoord { id: 1022, x: 2754, y: 945, r: 2912, theta_deg: 3411 }, // F22
    NeoPixelCoord { id: 1023, x: 2751, y: 316, r: 2769, theta_deg: 3535 }, // F23
    NeoPixelCoord { id: 1024, x: 3068, y: 612, r: 3129, theta_deg: 3487 }, // F24
    NeoPixelCoord { id: 1025, x: 2982, y: 1308, r: 3256, theta_deg: 3363 }, // F25
    NeoPixelCoord { id: 1026, x: 2603, y: 1585, r: 3048, theta_deg: 3287 }, // F26
    NeoPixelCoord { id: 1027, x: 2730, y: 1989, r: 3378, theta_deg: 3239 }, // F27
    NeoPixelCoord { id: 1028, x: 2296, y: 2197, r: 3178, theta_deg: 3163 }, // F28
    NeoPixelCoord { id: 1029, x: 1840, y: 2743, r: 3303, theta_deg: 3039 }, // F29
    NeoPixelCoord { id: 1030, x: 1368, y: 2780, r: 3099, theta_deg: 2962 }, // F30
    NeoPixelCoord { id: 1031, x: 1757, y: 3154, r: 3610, theta_deg: 2991 }, // F31
    NeoPixelCoord { id: 1032, x: 2268, y: 3033, r: 3787, theta_deg: 3068 }, // F32
    NeoPixelCoord { id: 1033, x: 2317, y: 2617, r: 3496, theta_deg: 3115 }, // F33
    NeoPixelCoord { id: 1034, x: 2784, y: 2404, r: 3678, theta_deg: 3192 }, // F34
    NeoPixelCoord { id: 1035, x: 3137, y: 1697, r: 3566, theta_deg: 3316 }, // F35
    NeoPixelCoord { id: 1036, x: 3503, y: 1327, r: 3746, theta_deg: 3392 }, // F36
    NeoPixelCoord { id: 1037, x: 3317, y: 952, r: 3451, theta_deg: 3440 }, // F37
    NeoPixelCoord { id: 1038, x: 3597, y: 528, r: 3636, theta_deg: 3516 }, // F38
    NeoPixelCoord { id: 1039, x: 4062, y: 386, r: 4080, theta_deg: 3546 }, // F39
    NeoPixelCoord { id: 1040, x: 3815, y: 887, r: 3916, theta_deg: 3469 }, // F40
    NeoPixelCoord { id: 1041, x: 3978, y: 1279, r: 4178, theta_deg: 3422 }, // F41
    NeoPixelCoord { id: 1042, x: 3627, y: 1729, r: 4019, theta_deg: 3345 }, // F42
    NeoPixelCoord { id: 1043, x: 3225, y: 2107, r: 3852, theta_deg: 3268 }, // F43
    NeoPixelCoord { id: 1044, x: 3250, y: 2529, r: 4118, theta_deg: 3221 }, // F44
    NeoPixelCoord { id: 1045, x: 2770, y: 2824, r: 3956, theta_deg: 3144 }, // F45
    NeoPixelCoord { id: 1046, x: 2153, y: 3439, r: 4057, theta_deg: 3020 }, // F46
    NeoPixelCoord { id: 1047, x: 1978, y: 3830, r: 4311, theta_deg: 2973 }, // F47
    NeoPixelCoord { id: 1048, x: 2557, y: 3654, r: 4460, theta_deg: 3050 }, // F48
    NeoPixelCoord { id: 1049, x: 2693, y: 3243, r: 4215, theta_deg: 3097 }, // F49
    NeoPixelCoord { id: 1050, x: 3214, y: 2958, r: 4368, theta_deg: 3174 }, // F50
    NeoPixelCoord { id: 1051, x: 3701, y: 2587, r: 4515, theta_deg: 3250 }, // F51
    NeoPixelCoord { id: 1052, x: 3693, y: 2152, r: 4274, theta_deg: 3298 }, // F52
    NeoPixelCoord { id: 1053, x: 4086, y: 1698, r: 4425, theta_deg: 3374 }, // F53
    NeoPixelCoord { id: 1054, x: 4264, y: 764, r: 4332, theta_deg: 3498 }, // F54
    NeoPixelCoord { id: 1055, x: 4674, y: 593, r: 4711, theta_deg: 3528 }, // F55
    NeoPixelCoord { id: 1056, x: 4824, y: 1023, r: 4931, theta_deg: 3480 }, // F56
    NeoPixelCoord { id: 1057, x: 4417, y: 1175, r: 4570, theta_deg: 3451 }, // F57
    NeoPixelCoord { id: 1058, x: 4518, y: 1612, r: 4797, theta_deg: 3404 }, // F58
    NeoPixelCoord { id: 1059, x: 4139, y: 2136, r: 4658, theta_deg: 3327 }, // F59
    NeoPixelCoord { id: 1060, x: 4137, y: 2589, r: 4880, theta_deg: 3280 }, // F60
    NeoPixelCoord { id: 1061, x: 3650, y: 3030, r: 4744, theta_deg: 3203 }, // F61
    NeoPixelCoord { id: 1062, x: 3119, y: 3387, r: 4604, theta_deg: 3126 }, // F62
    NeoPixelCoord { id: 1063, x: 2967, y: 3810, r: 4829, theta_deg: 3079 }, // F63
    NeoPixelCoord { id: 1064, x: 2363, y: 4053, r: 4692, theta_deg: 3002 }, // F64
    NeoPixelCoord { id: 1065, x: 2115, y: 4434, r: 4912, theta_deg: 2955 }, // F65
    NeoPixelCoord { id: 1066, x: 2499, y: 4617, r: 5250, theta_deg: 2984 }, // F66
    NeoPixelCoord { id: 1067, x: 2759, y: 4222, r: 5044, theta_deg: 3032 }, // F67
    NeoPixelCoord { id: 1068, x: 3382, y: 3913, r: 5172, theta_deg: 3108 }, // F68
    NeoPixelCoord { id: 1069, x: 3544, y: 3474, r: 4963, theta_deg: 3156 }, // F69
    NeoPixelCoord { id: 1070, x: 3967, y: 3510, r: 5297, theta_deg: 3185 }, // F70
    NeoPixelCoord { id: 1071, x: 4080, y: 3049, r: 5093, theta_deg: 3232 }, // F71
    NeoPixelCoord { id: 1072, x: 4561, y: 2539, r: 5220, theta_deg: 3309 }, // F72
    NeoPixelCoord { id: 1073, x: 4566, y: 2068, r: 5013, theta_deg: 3356 }, // F73
    NeoPixelCoord { id: 1074, x: 4925, y: 1478, r: 5142, theta_deg: 3433 }, // F74
    NeoPixelCoord { id: 1075, x: 5202, y: 828, r: 5268, theta_deg: 3510 }, // F75
    NeoPixelCoord { id: 1076, x: 5552, y: 595, r: 5584, theta_deg: 3539 }, // F76
    NeoPixelCoord { id: 1077, x: 5308, y: 1302, r: 5465, theta_deg: 3462 }, // F77
    NeoPixelCoord { id: 1078, x: 5363, y: 1796, r: 5656, theta_deg: 3415 }, // F78
    NeoPixelCoord { id: 1079, x: 4974, y: 1954, r: 5344, theta_deg: 3386 }, // F79
    NeoPixelCoord { id: 1080, x: 4970, y: 2444, r: 5539, theta_deg: 3338 }, // F80
    NeoPixelCoord { id: 1081, x: 4501, y: 3018, r: 5419, theta_deg: 3262 }, // F81
    NeoPixelCoord { id: 1082, x: 4387, y: 3499, r: 5611, theta_deg: 3214 }, // F82
    NeoPixelCoord { id: 1083, x: 3799, y: 3968, r: 5493, theta_deg: 3138 }, // F83
    NeoPixelCoord { id: 1084, x: 3578, y: 4415, r: 5683, theta_deg: 3090 }, // F84
    NeoPixelCoord { id: 1085, x: 3165, y: 4342, r: 5373, theta_deg: 3061 }, // F85
    NeoPixelCoord { id: 1086, x: 2897, y: 4754, r: 5567, theta_deg: 3014 }, // F86
    NeoPixelCoord { id: 1087, x: 2578, y: 5144, r: 5754, theta_deg: 2966 }, // F87
    NeoPixelCoord { id: 1088, x: 2981, y: 5258, r: 6045, theta_deg: 2995 }, // F88
    NeoPixelCoord { id: 1089, x: 3305, y: 4847, r: 5867, theta_deg: 3043 }, // F89
    NeoPixelCoord { id: 1090, x: 3996, y: 4446, r: 5977, theta_deg: 3119 }, // F90
    NeoPixelCoord { id: 1091, x: 4218, y: 3977, r: 5797, theta_deg: 3167 }, // F91
    NeoPixelCoord { id: 1092, x: 4802, y: 3444, r: 5909, theta_deg: 3243 }, // F92
    NeoPixelCoord { id: 1093, x: 4913, y: 2942, r: 5727, theta_deg: 3291 }, // F93
    NeoPixelCoord { id: 1094, x: 5315, y: 2825, r: 6019, theta_deg: 3320 }, // F94
    NeoPixelCoord { id: 1095, x: 5366, y: 2306, r: 5840, theta_deg: 3367 }, // F95
    NeoPixelCoord { id: 1096, x: 5732, y: 1599, r: 5951, theta_deg: 3444 }, // F96
    NeoPixelCoord { id: 1097, x: 5667, y: 1087, r: 5770, theta_deg: 3491 }, // F97
    NeoPixelCoord { id: 1098, x: 6002, y: 836, r: 6060, theta_deg: 3521 }, // F98
    NeoPixelCoord { id: 1099, x: 6081, y: 1366, r: 6233, theta_deg: 3473 }, // F99
    NeoPixelCoord { id: 1100, x: 6108, y: 1914, r: 6400, theta_deg: 3426 }, // F100
    NeoPixelCoord { id: 1101, x: 5745, y: 2128, r: 6127, theta_deg: 3397 }, // F101
    NeoPixelCoord { id: 1102, x: 5704, y: 2668, r: 6297, theta_deg: 3349 }, // F102
    NeoPixelCoord { id: 1103, x: 5210, y: 3348, r: 6192, theta_deg: 3273 }, // F103
    NeoPixelCoord { id: 1104, x: 5049, y: 3869, r: 6361, theta_deg: 3225 }, // F104
    NeoPixelCoord { id: 1105, x: 4635, y: 3943, r: 6086, theta_deg: 3196 }, // F105
    NeoPixelCoord { id: 1106, x: 4415, y: 4434, r: 6258, theta_deg: 3149 }, // F106
    NeoPixelCoord { id: 1107, x: 4142, y: 4912, r: 6425, theta_deg: 3101 }, // F107
    NeoPixelCoord { id: 1108, x: 3721, y: 4899, r: 6152, theta_deg: 3072 }, // F108
    NeoPixelCoord { id: 1109, x: 3395, y: 5333, r: 6322, theta_deg: 3025 }, // F109
    NeoPixelCoord { id: 1110, x: 3020, y: 5742, r: 6488, theta_deg: 2977 }, // F110
    NeoPixelCoord { id: 1111, x: 3441, y: 5803, r: 6747, theta_deg: 3007 }, // F111
    NeoPixelCoord { id: 1112, x: 3816, y: 5370, r: 6588, theta_deg: 3054 }, // F112
    NeoPixelCoord { id: 1113, x: 4566, y: 4885, r: 6686, theta_deg: 3131 }, // F113
    NeoPixelCoord { id: 1114, x: 4835, y: 4383, r: 6526, theta_deg: 3178 }, // F114
    NeoPixelCoord { id: 1115, x: 5252, y: 4294, r: 6783, theta_deg: 3207 }, // F115
    NeoPixelCoord { id: 1116, x: 5458, y: 3756, r: 6625, theta_deg: 3255 }, // F116
    NeoPixelCoord { id: 1117, x: 5609, y: 3212, r: 6463, theta_deg: 3302 }, // F117
    NeoPixelCoord { id: 1118, x: 5998, y: 3039, r: 6723, theta_deg: 3331 }, // F118
    NeoPixelCoord { id: 1119, x: 6080, y: 2473, r: 6564, theta_deg: 3379 }, // F119
    NeoPixelCoord { id: 1120, x: 6440, y: 2244, r: 6820, theta_deg: 3408 }, // F120
    NeoPixelCoord { id: 1121, x: 6452, y: 1665, r: 6663, theta_deg: 3455 }, // F121
    NeoPixelCoord { id: 1122, x: 6408, y: 1100, r: 6502, theta_deg: 3503 }, // F122
    NeoPixelCoord { id: 1123, x: 6713, y: 802, r: 6760, theta_deg: 3532 }, // F123
    NeoPixelCoord { id: 1124, x: 7078, y: 1073, r: 7159, theta_deg: 3514 }, // F124
    NeoPixelCoord { id: 1125, x: 6776, y: 1384, r: 6915, theta_deg: 3485 }, // F125
    NeoPixelCoord { id: 1126, x: 6784, y: 1981, r: 7067, theta_deg: 3437 }, // F126
    NeoPixelCoord { id: 1127, x: 6736, y: 2588, r: 7216, theta_deg: 3390 }, // F127
    NeoPixelCoord { id: 1128, x: 6374, y: 2830, r: 6974, theta_deg: 3361 }, // F128
    NeoPixelCoord { id: 1129, x: 6250, y: 3419, r: 7124, theta_deg: 3313 }, // F129
    NeoPixelCoord { id: 1130, x: 5859, y: 3605, r: 6879, theta_deg: 3284 }, // F130
    NeoPixelCoord { id: 1131, x: 5664, y: 4167, r: 7032, theta_deg: 3237 }, // F131
    NeoPixelCoord { id: 1132, x: 5413, y: 4719, r: 7181, theta_deg: 3189 }, // F132
    NeoPixelCoord { id: 1133, x: 4990, y: 4820, r: 6938, theta_deg: 3160 }, // F133
    NeoPixelCoord { id: 1134, x: 4675, y: 5329, r: 7089, theta_deg: 3113 }, // F134
    NeoPixelCoord { id: 1135, x: 4244, y: 5368, r: 6843, theta_deg: 3083 }, // F135
    NeoPixelCoord { id: 1136, x: 3871, y: 5828, r: 6996, theta_deg: 3036 }, // F136
    NeoPixelCoord { id: 1137, x: 3449, y: 6259, r: 7146, theta_deg: 2989 }, // F137
    NeoPixelCoord { id: 1138, x: 3018, y: 6207, r: 6902, theta_deg: 2959 }, // F138
    NeoPixelCoord { id: 1139, x: 3422, y: 6701, r: 7524, theta_deg: 2970 }, // F139
    NeoPixelCoord { id: 1140, x: 3888, y: 6275, r: 7382, theta_deg: 3018 }, // F140
    NeoPixelCoord { id: 1141, x: 4307, y: 5816, r: 7237, theta_deg: 3065 }, // F141
    NeoPixelCoord { id: 1142, x: 4747, y: 5768, r: 7470, theta_deg: 3094 }, // F142
    NeoPixelCoord { id: 1143, x: 5107, y: 5254, r: 7327, theta_deg: 3142 }, // F143
    NeoPixelCoord { id: 1144, x: 5537, y: 5143, r: 7557, theta_deg: 3171 }, // F144
    NeoPixelCoord { id: 1145, x: 5832, y: 4581, r: 7416, theta_deg: 3218 }, // F145
    NeoPixelCoord { id: 1146, x: 6069, y: 4005, r: 7271, theta_deg: 3266 }, // F146
    NeoPixelCoord { id: 1147, x: 6466, y: 3807, r: 7504, theta_deg: 3295 }, // F147
    NeoPixelCoord { id: 1148, x: 6630, y: 3198, r: 7361, theta_deg: 3342 }, // F148
    NeoPixelCoord { id: 1149, x: 6996, y: 2945, r: 7590, theta_deg: 3372 }, // F149
    NeoPixelCoord { id: 1150, x: 7081, y: 2313, r: 7449, theta_deg: 3419 }, // F150
    NeoPixelCoord { id: 1151, x: 7108, y: 1687, r: 7306, theta_deg: 3466 }, // F151
    NeoPixelCoord { id: 1152, x: 7412, y: 1364, r: 7537, theta_deg: 3496 }, // F152
    NeoPixelCoord { id: 1153, x: 7358, y: 733, r: 7395, theta_deg: 3543 }, // F153
    NeoPixelCoord { id: 1154, x: 7695, y: 1013, r: 7761, theta_deg: 3525 }, // F154
    NeoPixelCoord { id: 1155, x: 7717, y: 1674, r: 7896, theta_deg: 3478 }, // F155
    NeoPixelCoord { id: 1156, x: 7409, y: 2008, r: 7676, theta_deg: 3448 }, // F156
    NeoPixelCoord { id: 1157, x: 7347, y: 2659, r: 7813, theta_deg: 3401 }, // F157
    NeoPixelCoord { id: 1158, x: 7224, y: 3313, r: 7947, theta_deg: 3354 }, // F158
    NeoPixelCoord { id: 1159, x: 6852, y: 3576, r: 7729, theta_deg: 3324 }, // F159
    NeoPixelCoord { id: 1160, x: 6648, y: 4202, r: 7865, theta_deg: 3277 }, // F160
    NeoPixelCoord { id: 1161, x: 6244, y: 4409, r: 7644, theta_deg: 3248 }, // F161
    NeoPixelCoord { id: 1162, x: 5964, y: 4997, r: 7781, theta_deg: 3200 }, // F162
    NeoPixelCoord { id: 1163, x: 5627, y: 5568, r: 7916, theta_deg: 3153 }, // F163
    NeoPixelCoord { id: 1164, x: 5187, y: 5686, r: 7696, theta_deg: 3124 }, // F164
    NeoPixelCoord { id: 1165, x: 4784, y: 6203, r: 7833, theta_deg: 3076 }, // F165
    NeoPixelCoord { id: 1166, x: 4334, y: 6256, r: 7611, theta_deg: 3047 }, // F166
    NeoPixelCoord { id: 1167, x: 4328, y: 6689, r: 7967, theta_deg: 3029 }, // F167
    NeoPixelCoord { id: 1168, x: 3872, y: 6712, r: 7749, theta_deg: 3000 }, // F168
    NeoPixelCoord { id: 1169, x: 3362, y: 7132, r: 7884, theta_deg: 2952 }, // F169
    NeoPixelCoord { id: 1170, x: 3823, y: 7140, r: 8099, theta_deg: 2982 }, // F170
    NeoPixelCoord { id: 1171, x: 4291, y: 7114, r: 8308, theta_deg: 3011 }, // F171
    NeoPixelCoord { id: 1172, x: 4788, y: 6631, r: 8179, theta_deg: 3058 }, // F172
    NeoPixelCoord { id: 1173, x: 5234, y: 6114, r: 8049, theta_deg: 3106 }, // F173
    NeoPixelCoord { id: 1174, x: 5685, y: 5992, r: 8259, theta_deg: 3135 }, // F174
    NeoPixelCoord { id: 1175, x: 6063, y: 5416, r: 8130, theta_deg: 3182 }, // F175
    NeoPixelCoord { id: 1176, x: 6494, y: 5230, r: 8338, theta_deg: 3212 }, // F176
    NeoPixelCoord { id: 1177, x: 6385, y: 4817, r: 7998, theta_deg: 3230 }, // F177
    NeoPixelCoord { id: 1178, x: 6798, y: 4604, r: 8210, theta_deg: 3259 }, // F178
    NeoPixelCoord { id: 1179, x: 7041, y: 3963, r: 8080, theta_deg: 3306 }, // F179
    NeoPixelCoord { id: 1180, x: 7422, y: 3691, r: 8289, theta_deg: 3336 }, // F180
    NeoPixelCoord { id: 1181, x: 7582, y: 3018, r: 8160, theta_deg: 3383 }, // F181
    NeoPixelCoord { id: 1182, x: 7680, y: 2344, r: 8029, theta_deg: 3430 }, // F182
    NeoPixelCoord { id: 1183, x: 7994, y: 2000, r: 8240, theta_deg: 3460 }, // F183
    NeoPixelCoord { id: 1184, x: 8004, y: 1312, r: 8111, theta_deg: 3507 }, // F184
    NeoPixelCoord { id: 1185, x: 8268, y: 925, r: 8319, theta_deg: 3536 }, // F185
    NeoPixelCoord { id: 1186, x: 8558, y: 1232, r: 8646, theta_deg: 3518 }, // F186
    NeoPixelCoord { id: 1187, x: 8287, y: 1629, r: 8446, theta_deg: 3489 }, // F187
    NeoPixelCoord { id: 1188, x: 8244, y: 2341, r: 8570, theta_deg: 3441 }, // F188
    NeoPixelCoord { id: 1189, x: 7922, y: 2694, r: 8368, theta_deg: 3412 }, // F189
    NeoPixelCoord { id: 1190, x: 7788, y: 3389, r: 8494, theta_deg: 3365 }, // F190
    NeoPixelCoord { id: 1191, x: 7591, y: 4079, r: 8618, theta_deg: 3317 }, // F191
    NeoPixelCoord { id: 1192, x: 7200, y: 4357, r: 8416, theta_deg: 3288 }, // F192
    NeoPixelCoord { id: 1193, x: 6917, y: 5010, r: 8541, theta_deg: 3241 }, // F193
    NeoPixelCoord { id: 1194, x: 6132, y: 5835, r: 8464, theta_deg: 3164 }, // F194
    NeoPixelCoord { id: 1195, x: 5712, y: 6414, r: 8589, theta_deg: 3117 }, // F195
    NeoPixelCoord { id: 1196, x: 5250, y: 6540, r: 8386, theta_deg: 3088 }, // F196
    NeoPixelCoord { id: 1197, x: 4763, y: 7055, r: 8512, theta_deg: 3040 }, // F197
    NeoPixelCoord { id: 1198, x: 4224, y: 7532, r: 8636, theta_deg: 2993 }, // F198
    NeoPixelCoord { id: 1199, x: 3745, y: 7558, r: 8435, theta_deg: 2964 }, // F199
];
