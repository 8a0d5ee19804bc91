//! Preset shape geometries (a:prstGeom/@prst)

macro_rules! preset_shapes {
    ($($variant:ident => $prst:literal,)*) => {
        /// Preset geometry of an auto shape
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum AutoShapeType {
            $($variant,)*
        }

        impl AutoShapeType {
            /// Every preset, in declaration order
            pub const ALL: &'static [AutoShapeType] = &[$(AutoShapeType::$variant,)*];

            /// Parse a `prst` attribute value
            pub fn from_preset(prst: &str) -> Option<Self> {
                match prst {
                    $($prst => Some(AutoShapeType::$variant),)*
                    _ => None,
                }
            }

            /// The `prst` attribute value
            pub fn preset(self) -> &'static str {
                match self {
                    $(AutoShapeType::$variant => $prst,)*
                }
            }
        }
    };
}

preset_shapes! {
    Star4 => "star4",
    Star5 => "star5",
    Star6 => "star6",
    Star7 => "star7",
    Star8 => "star8",
    Star10 => "star10",
    Star12 => "star12",
    Star16 => "star16",
    Star24 => "star24",
    Star32 => "star32",
    ActionButtonBackPrevious => "actionButtonBackPrevious",
    ActionButtonBeginning => "actionButtonBeginning",
    ActionButtonBlank => "actionButtonBlank",
    ActionButtonDocument => "actionButtonDocument",
    ActionButtonEnd => "actionButtonEnd",
    ActionButtonForwardNext => "actionButtonForwardNext",
    ActionButtonHelp => "actionButtonHelp",
    ActionButtonHome => "actionButtonHome",
    ActionButtonInformation => "actionButtonInformation",
    ActionButtonMovie => "actionButtonMovie",
    ActionButtonReturn => "actionButtonReturn",
    ActionButtonSound => "actionButtonSound",
    Arc => "arc",
    BentArrow => "bentArrow",
    BentUpArrow => "bentUpArrow",
    Bevel => "bevel",
    BlockArc => "blockArc",
    BracePair => "bracePair",
    BracketPair => "bracketPair",
    Can => "can",
    ChartPlus => "chartPlus",
    ChartStar => "chartStar",
    ChartX => "chartX",
    Chevron => "chevron",
    Chord => "chord",
    CircularArrow => "circularArrow",
    Cloud => "cloud",
    CloudCallout => "cloudCallout",
    Corner => "corner",
    CornerTabs => "cornerTabs",
    Cube => "cube",
    CurvedDownArrow => "curvedDownArrow",
    CurvedLeftArrow => "curvedLeftArrow",
    CurvedRightArrow => "curvedRightArrow",
    CurvedUpArrow => "curvedUpArrow",
    Decagon => "decagon",
    DiagonalStripe => "diagStripe",
    Diamond => "diamond",
    Dodecagon => "dodecagon",
    Donut => "donut",
    DoubleWave => "doubleWave",
    DownArrow => "downArrow",
    DownArrowCallout => "downArrowCallout",
    DownRibbon => "ribbon",
    UpRibbon => "ribbon2",
    CurvedDownRibbon => "ellipseRibbon",
    CurvedUpRibbon => "ellipseRibbon2",
    Explosion1 => "irregularSeal1",
    Explosion2 => "irregularSeal2",
    FlowChartAlternateProcess => "flowChartAlternateProcess",
    FlowChartCollate => "flowChartCollate",
    FlowChartConnector => "flowChartConnector",
    FlowChartDecision => "flowChartDecision",
    FlowChartDelay => "flowChartDelay",
    FlowChartDisplay => "flowChartDisplay",
    FlowChartDocument => "flowChartDocument",
    FlowChartExtract => "flowChartExtract",
    FlowChartInputOutput => "flowChartInputOutput",
    FlowChartInternalStorage => "flowChartInternalStorage",
    FlowChartMagneticDisk => "flowChartMagneticDisk",
    FlowChartMagneticDrum => "flowChartMagneticDrum",
    FlowChartMagneticTape => "flowChartMagneticTape",
    FlowChartManualInput => "flowChartManualInput",
    FlowChartManualOperation => "flowChartManualOperation",
    FlowChartMerge => "flowChartMerge",
    FlowChartMultidocument => "flowChartMultidocument",
    FlowChartOfflineStorage => "flowChartOfflineStorage",
    FlowChartOffpageConnector => "flowChartOffpageConnector",
    FlowChartOnlineStorage => "flowChartOnlineStorage",
    FlowChartOr => "flowChartOr",
    FlowChartPredefinedProcess => "flowChartPredefinedProcess",
    FlowChartPreparation => "flowChartPreparation",
    FlowChartProcess => "flowChartProcess",
    FlowChartPunchedCard => "flowChartPunchedCard",
    FlowChartPunchedTape => "flowChartPunchedTape",
    FlowChartSort => "flowChartSort",
    FlowChartSummingJunction => "flowChartSummingJunction",
    FlowChartTerminator => "flowChartTerminator",
    FoldedCorner => "foldedCorner",
    Frame => "frame",
    Funnel => "funnel",
    Gear6 => "gear6",
    Gear9 => "gear9",
    HalfFrame => "halfFrame",
    Heart => "heart",
    Heptagon => "heptagon",
    Hexagon => "hexagon",
    HorizontalScroll => "horizontalScroll",
    VerticalScroll => "verticalScroll",
    IsoscelesTriangle => "triangle",
    RightTriangle => "rtTriangle",
    LeftArrow => "leftArrow",
    LeftArrowCallout => "leftArrowCallout",
    LeftBrace => "leftBrace",
    LeftBracket => "leftBracket",
    LeftCircularArrow => "leftCircularArrow",
    LeftRightArrow => "leftRightArrow",
    LeftRightArrowCallout => "leftRightArrowCallout",
    LeftRightCircularArrow => "leftRightCircularArrow",
    LeftRightRibbon => "leftRightRibbon",
    LeftRightUpArrow => "leftRightUpArrow",
    LeftUpArrow => "leftUpArrow",
    LightningBolt => "lightningBolt",
    LineCallout1 => "borderCallout1",
    LineCallout2 => "borderCallout2",
    LineCallout3 => "borderCallout3",
    LineCallout1AccentBar => "accentCallout1",
    LineCallout2AccentBar => "accentCallout2",
    LineCallout3AccentBar => "accentCallout3",
    LineCallout1BorderAndAccentBar => "accentBorderCallout1",
    LineCallout2BorderAndAccentBar => "accentBorderCallout2",
    LineCallout3BorderAndAccentBar => "accentBorderCallout3",
    LineCallout1NoBorder => "callout1",
    LineCallout2NoBorder => "callout2",
    LineCallout3NoBorder => "callout3",
    Line => "line",
    LineInverse => "lineInv",
    MathDivide => "mathDivide",
    MathEqual => "mathEqual",
    MathMinus => "mathMinus",
    MathMultiply => "mathMultiply",
    MathNotEqual => "mathNotEqual",
    MathPlus => "mathPlus",
    Moon => "moon",
    NonIsoscelesTrapezoid => "nonIsoscelesTrapezoid",
    NoSymbol => "noSmoking",
    NotchedRightArrow => "notchedRightArrow",
    Octagon => "octagon",
    Oval => "ellipse",
    OvalCallout => "wedgeEllipseCallout",
    Parallelogram => "parallelogram",
    Pentagon => "homePlate",
    RegularPentagon => "pentagon",
    Pie => "pie",
    PieWedge => "pieWedge",
    Plaque => "plaque",
    PlaqueTabs => "plaqueTabs",
    Plus => "plus",
    QuadArrow => "quadArrow",
    QuadArrowCallout => "quadArrowCallout",
    Rectangle => "rect",
    RectangularCallout => "wedgeRectCallout",
    RightArrow => "rightArrow",
    RightArrowCallout => "rightArrowCallout",
    RightBrace => "rightBrace",
    RightBracket => "rightBracket",
    Round1Rectangle => "round1Rect",
    Round2DiagRectangle => "round2DiagRect",
    Round2SameRectangle => "round2SameRect",
    RoundedRectangle => "roundRect",
    RoundedRectangularCallout => "wedgeRoundRectCallout",
    SmileyFace => "smileyFace",
    Snip1Rectangle => "snip1Rect",
    Snip2DiagRectangle => "snip2DiagRect",
    Snip2SameRectangle => "snip2SameRect",
    SnipRoundRectangle => "snipRoundRect",
    SquareTabs => "squareTabs",
    StripedRightArrow => "stripedRightArrow",
    Sun => "sun",
    SwooshArrow => "swooshArrow",
    Tear => "teardrop",
    Trapezoid => "trapezoid",
    UpArrow => "upArrow",
    UpArrowCallout => "upArrowCallout",
    UpDownArrow => "upDownArrow",
    UpDownArrowCallout => "upDownArrowCallout",
    UTurnArrow => "uturnArrow",
    Wave => "wave",
}

impl Default for AutoShapeType {
    fn default() -> Self {
        AutoShapeType::Rectangle
    }
}

impl std::fmt::Display for AutoShapeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.preset())
    }
}
