//! Built-in instrument universes.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// A named set of instruments and the benchmark they rotate around.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Universe {
    /// Universe name
    pub name: String,
    /// Benchmark identifier
    pub benchmark: String,
    /// Instrument identifiers in display order
    pub tickers: Vec<String>,
}

impl Universe {
    pub fn new(name: &str, benchmark: &str, tickers: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            benchmark: benchmark.to_string(),
            tickers: tickers.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Built-in universes in menu order.
pub static BUILTIN_UNIVERSES: LazyLock<Vec<Universe>> = LazyLock::new(|| {
    vec![
        Universe::new("World", "ACWI", WORLD_TICKERS),
        Universe::new("US", "^GSPC", US_TICKERS),
        Universe::new("HK", "^HSI", HK_TICKERS),
    ]
});

/// List all built-in universes.
pub fn list_universes() -> &'static [Universe] {
    &BUILTIN_UNIVERSES
}

/// Look up a built-in universe by name (case-insensitive).
pub fn get_universe(name: &str) -> Result<&'static Universe> {
    BUILTIN_UNIVERSES
        .iter()
        .find(|u| u.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| Error::UnknownUniverse(name.to_string()))
}

const WORLD_TICKERS: &[&str] = &[
    "^GSPC", "^NDX", "^RUT", "^HSI", "3032.HK", "^STOXX50E", "^BSESN", "^KS11", "^TWII",
    "000300.SS", "^N225", "HYG", "AGG", "EEM", "GDX", "XLE", "XME", "AAXJ", "IBB", "DBA", "TLT",
    "EFA", "EWZ", "EWG", "EWJ", "EWY", "EWT", "EWQ", "EWA", "EWC", "EWH", "EWS", "EIDO", "EPHE",
    "THD", "INDA", "KWEB", "QQQ", "SPY", "IWM", "VNQ", "GLD", "SLV", "USO", "UNG", "VEA", "VWO",
    "VTI", "VXUS",
];

const US_TICKERS: &[&str] = &[
    "AAPL", "ABBV", "ABNB", "ABSV", "ABT", "ACN", "ADBE", "ADP", "ADSK", "ALGN", "AMAT", "AMD",
    "AMGN", "AMZN", "AMT", "ANET", "APA", "ARGO", "ARM", "AS", "ASML", "AVGO", "BA", "BAC", "BDX",
    "BLK", "BKNG", "BMRG", "BMY", "BRK-B", "CAT", "CB", "CCL", "CDNS", "CF", "CHTR", "CME", "COP",
    "COST", "CRM", "CRWD", "CSCO", "CSX", "CVS", "CVX", "DDOG", "DE", "DHR", "DIS", "DLTR", "DVN",
    "DXCM", "EOG", "EXM", "F", "FANG", "FCX", "FDD", "FTNT", "FUTU", "G", "GE", "GILD", "GIS", "GM",
    "GOOGL", "GS", "HAL", "HD", "HON", "HSY", "IBM", "ICE", "IDXX", "INTC", "INTU", "ISRG", "ITW",
    "IWM", "JNJ", "JPM", "JPU", "KD", "KHC", "KMB", "KMI", "KO", "LEN", "LIAT", "LLY", "LMT", "LOW",
    "LRCX", "MA", "MAR", "MCD", "MDLZ", "META", "MMM", "MRK", "MRO", "MSFT", "MU", "NEE", "NFLX",
    "NKE", "NOW", "NRG", "NVO", "NVDA", "NXTR", "ORCL", "ORLY", "OXY", "PANW", "PEP", "PFE", "PG",
    "PGR", "PLTR", "PM", "PSX", "QCOM", "REGN", "RTX", "SBUX", "SLB", "SMH", "SNOW", "SPGI", "TGT",
    "TJX", "TMO", "TRV", "TSLA", "TSM", "TTD", "TTWO", "TXN", "TEAM", "ULTA", "UNH", "UNP", "UPS",
    "V", "VLO", "VMO", "VST", "VZ", "WDH", "WMB", "WMT", "WRTC", "XLC", "XLE", "XLF", "XLI", "XLK",
    "XLP", "XLRE", "XLU", "XLV", "XLY", "XOM", "YUM", "ZS", "BX", "COIN", "GOOG", "TMUS", "AZN",
    "LIN", "SHOP", "PDD", "CMCSA", "APP", "MELI", "VRTX", "SNPS", "KLAC", "MSTR", "ADI", "CEG",
    "DASH", "CTAS", "TRI", "MRVL", "PYPL", "WDAY", "AEP", "MNST", "ROP", "AXON", "NXPI", "FAST",
    "PAYX", "PCAR", "KDP", "CCEP", "ROST", "CPRT", "BKR", "EXC", "XEL", "CSGP", "EA", "MCHP",
    "VRSK", "CTSH", "GEHC", "WBD", "ODFL", "LULU", "ON", "CDW", "GFS", "BIIB", "WFC", "AXP", "MS",
    "T", "UBER", "SCHW", "BSX", "SYK", "C", "GEV", "ETN", "MMC", "APH", "MDT", "KKR", "PLD", "WELL",
    "MO", "SO", "TT", "WM", "HCA", "FI", "DUK", "EQIX", "SHW", "MCK", "ELV", "MCO", "PH", "AJG",
    "CI", "TDG", "AON", "RSG", "DELL", "APO", "COF", "ZTS", "ECL", "RCL", "GD", "CL", "HWM", "CMG",
    "PNC", "NOC", "MSI", "USB", "EMR", "JCI", "BK", "APD", "AZO", "SPG", "DLR", "CARR", "HLT",
    "NEM", "NSC", "AFL", "COR", "ALL", "MET", "PWR", "PSA", "TFC", "FDX", "GWW", "OKE", "O", "AIG",
    "SRE", "AMP", "MPC", "NDAQ",
];

const HK_TICKERS: &[&str] = &[
    "0001.HK", "0002.HK", "0003.HK", "0005.HK", "0006.HK", "0011.HK", "0012.HK", "0016.HK",
    "0017.HK", "0019.HK", "0020.HK", "0027.HK", "0066.HK", "0101.HK", "0144.HK", "0168.HK",
    "0175.HK", "0177.HK", "0220.HK", "0241.HK", "0267.HK", "0268.HK", "0285.HK", "0288.HK",
    "0291.HK", "0300.HK", "0316.HK", "0317.HK", "0322.HK", "0338.HK", "0358.HK", "0386.HK",
    "0388.HK", "0390.HK", "0489.HK", "0552.HK", "0598.HK", "0636.HK", "0669.HK", "0688.HK",
    "0696.HK", "0700.HK", "0728.HK", "0753.HK", "0762.HK", "0763.HK", "0772.HK", "0788.HK",
    "0799.HK", "0806.HK", "0811.HK", "0823.HK", "0836.HK", "0857.HK", "0868.HK", "0883.HK",
    "0902.HK", "0914.HK", "0916.HK", "0921.HK", "0939.HK", "0941.HK", "0956.HK", "0960.HK",
    "0968.HK", "0981.HK", "0991.HK", "0992.HK", "0998.HK", "1024.HK", "1033.HK", "1038.HK",
    "1044.HK", "1055.HK", "1066.HK", "1071.HK", "1072.HK", "1088.HK", "1093.HK", "1099.HK",
    "1109.HK", "1113.HK", "1133.HK", "1138.HK", "1157.HK", "1171.HK", "1177.HK", "1186.HK",
    "1209.HK", "1211.HK", "1288.HK", "1299.HK", "1316.HK", "1336.HK", "1339.HK", "1347.HK",
    "1359.HK", "1378.HK", "1398.HK", "1515.HK", "1618.HK", "1658.HK", "1766.HK", "1772.HK",
    "1776.HK", "1787.HK", "1800.HK", "1801.HK", "1810.HK", "1816.HK", "1818.HK", "1833.HK",
    "1860.HK", "1876.HK", "1880.HK", "1886.HK", "1898.HK", "1918.HK", "1919.HK", "1928.HK",
    "1929.HK", "1958.HK", "1988.HK", "1997.HK", "2007.HK", "2013.HK", "2015.HK", "2018.HK",
    "2020.HK", "2196.HK", "2202.HK", "2208.HK", "2238.HK", "2252.HK", "2269.HK", "2313.HK",
    "2318.HK", "2319.HK", "2328.HK", "2331.HK", "2333.HK", "2382.HK", "2386.HK", "2388.HK",
    "2400.HK", "2480.HK", "2498.HK", "2533.HK", "2600.HK", "2601.HK", "2607.HK", "2611.HK",
    "2628.HK", "2688.HK", "2689.HK", "2696.HK", "2727.HK", "2799.HK", "2845.HK", "2866.HK",
    "2880.HK", "2883.HK", "2899.HK", "3191.HK", "3311.HK", "3319.HK", "3323.HK", "3328.HK",
    "3330.HK", "3606.HK", "3618.HK", "3690.HK", "3698.HK", "3800.HK", "3866.HK", "3880.HK",
    "3888.HK", "3898.HK", "3900.HK", "3908.HK", "3931.HK", "3968.HK", "3969.HK", "3988.HK",
    "3993.HK", "3996.HK", "6030.HK", "6060.HK", "6078.HK", "6098.HK", "6099.HK", "6139.HK",
    "6160.HK", "6178.HK", "6181.HK", "6618.HK", "6655.HK", "6680.HK", "6682.HK", "6690.HK",
    "6699.HK", "6806.HK", "6808.HK", "6818.HK", "6862.HK", "6865.HK", "6869.HK", "6881.HK",
    "6886.HK", "6955.HK", "6963.HK", "6969.HK", "6990.HK", "9600.HK", "9601.HK", "9618.HK",
    "9626.HK", "9633.HK", "9666.HK", "9668.HK", "9676.HK", "9696.HK", "9698.HK", "9699.HK",
    "9801.HK", "9863.HK", "9868.HK", "9880.HK", "9888.HK", "9889.HK", "9901.HK", "9922.HK",
    "9923.HK", "9961.HK", "9968.HK", "9988.HK", "9992.HK", "9995.HK", "9999.HK",
];
